//! Common helpers shared by the savings calculations and their display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Rounds a decimal value to a whole number, halves away from zero.
///
/// Negative zero results are normalized to [`Decimal::ZERO`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(433.00)), dec!(433));
/// assert_eq!(round_whole(dec!(10625.5)), dec!(10626));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded.normalize()
    }
}

/// Converts minutes to hours, or `None` if the division overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::minutes_to_hours;
///
/// assert_eq!(minutes_to_hours(dec!(1275)), Some(dec!(21.25)));
/// ```
pub fn minutes_to_hours(minutes: Decimal) -> Option<Decimal> {
    minutes.checked_div(MINUTES_PER_HOUR)
}
