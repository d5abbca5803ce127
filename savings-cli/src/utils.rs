use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use savings_core::calculations::common::{MINUTES_PER_HOUR, round_whole};

/// Leading integer of a form value: optional whitespace, sign, digits.
static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?[0-9]+)").expect("LEADING_INTEGER should compile")
});

/// Non-breaking space used by the Polish number format.
const NBSP: char = '\u{a0}';

/// Coerces raw form text into a whole number.
///
/// The empty string and `"0"` give zero. Otherwise the leading integer is
/// taken and anything after it is dropped, so `"3.7"` gives 3 and `"12abc"`
/// gives 12. Returns `None` (and logs) when no integer can be read; the
/// caller keeps its previous value in that case.
pub fn coerce_whole_number(raw: &str) -> Option<i64> {
    if raw.is_empty() || raw == "0" {
        return Some(0);
    }
    let parsed = LEADING_INTEGER
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok());
    if parsed.is_none() {
        tracing::warn!(input = %raw, "ignoring non-numeric input");
    }
    parsed
}

/// Form display of an input value: zero shows as an empty field.
pub fn input_display(value: i64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Rounds a derived count for display, e.g. `433.00` → `"433"`.
pub fn format_whole(value: Decimal) -> String {
    round_whole(value).to_string()
}

/// Formats an amount in PLN with no decimal places, Polish style.
///
/// Thousands are grouped with a non-breaking space once the amount has five
/// or more digits; four-digit amounts stay ungrouped.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_whole(value);
    let digits = rounded.abs().to_string();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}{NBSP}zł", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(ch);
    }
    out
}

/// Formats a duration given in minutes as `"H godz M min"`.
///
/// The hour part is dropped when zero, as is the minute part. Minutes are
/// rounded to whole minutes first, so 119.6 renders as `"2 godz"`.
pub fn format_time(minutes: Decimal) -> String {
    let total = round_whole(minutes);
    let sign = if total.is_sign_negative() { "-" } else { "" };
    let total = total.abs();
    let hours = (total / MINUTES_PER_HOUR).trunc();
    let mins = total - hours * MINUTES_PER_HOUR;

    if hours.is_zero() {
        format!("{sign}{} min", mins.normalize())
    } else if mins.is_zero() {
        format!("{sign}{} godz", hours.normalize())
    } else {
        format!("{sign}{} godz {} min", hours.normalize(), mins.normalize())
    }
}
