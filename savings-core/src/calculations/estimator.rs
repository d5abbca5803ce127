//! Savings estimate for automated CRM entry after sales calls.
//!
//! Given a team's call volume and the minutes each call costs in manual CRM
//! work, this module estimates how much of that time automation removes and
//! what the removed time is worth.
//!
//! # Derivation
//!
//! | Value                | Formula |
//! |----------------------|---------|
//! | Weekly calls         | salespeople × calls per week |
//! | Weekly manual time   | weekly calls × admin minutes per call |
//! | Weekly time saved    | weekly manual time × automation efficiency |
//! | Weekly hours saved   | weekly time saved ÷ 60 |
//! | Money saved per week | weekly hours saved × hourly cost × salespeople |
//! | Monthly figures      | weekly figure × weeks per month |
//! | Yearly figures       | weekly figure × weeks per year |
//!
//! Call duration is part of the input record but does not enter any formula.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::{SavingsEstimator, SavingsEstimatorConfig, SavingsInput};
//!
//! let input = SavingsInput {
//!     salespeople: 5,
//!     calls_per_week: 20,
//!     call_duration: 30,
//!     admin_minutes_per_call: 15,
//!     hourly_cost: 100,
//! };
//!
//! let estimator = SavingsEstimator::new(SavingsEstimatorConfig::default());
//! let estimate = estimator.calculate(&input).unwrap();
//!
//! assert_eq!(estimate.weekly_calls, dec!(100));
//! assert_eq!(estimate.weekly_saved_minutes, dec!(1275));
//! assert_eq!(estimate.money_saved_week, dec!(10625));
//! assert_eq!(estimate.money_saved_year, dec!(552500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::minutes_to_hours;
use crate::{PeriodProfile, SavingsInput};

/// Fraction of manual CRM time removed by automation (85%).
pub const AUTOMATION_EFFICIENCY: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Average number of weeks in a month.
pub const AVERAGE_WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Weeks in a flat four-week month.
pub const FOUR_WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Weeks in a calendar year.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Weeks in a year of twelve four-week months.
pub const FOUR_WEEK_MONTHS_PER_YEAR: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Errors that can occur while estimating savings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SavingsEstimatorError {
    /// The automation efficiency must be between 0 and 1.
    #[error("automation efficiency must be between 0 and 1, got {0}")]
    InvalidAutomationEfficiency(Decimal),

    /// The weeks-per-month factor must be positive.
    #[error("weeks per month must be positive, got {0}")]
    InvalidWeeksPerMonth(Decimal),

    /// The weeks-per-year factor must be positive.
    #[error("weeks per year must be positive, got {0}")]
    InvalidWeeksPerYear(Decimal),

    /// An intermediate value exceeded the representable decimal range.
    #[error("arithmetic overflow while computing {stage}")]
    Overflow { stage: &'static str },
}

/// Constants driving the savings estimate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::{PeriodProfile, SavingsEstimatorConfig};
///
/// let config = SavingsEstimatorConfig::from_profile(PeriodProfile::FourWeekMonth);
///
/// assert_eq!(config.automation_efficiency, dec!(0.85));
/// assert_eq!(config.weeks_per_month, dec!(4));
/// assert_eq!(config.weeks_per_year, dec!(48));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEstimatorConfig {
    /// Fraction of manual time eliminated, in `[0, 1]`.
    pub automation_efficiency: Decimal,

    /// Factor scaling weekly figures to monthly ones.
    pub weeks_per_month: Decimal,

    /// Factor scaling weekly figures to yearly ones.
    pub weeks_per_year: Decimal,
}

impl SavingsEstimatorConfig {
    /// Creates the configuration for a period profile with the default
    /// automation efficiency.
    pub fn from_profile(profile: PeriodProfile) -> Self {
        let (weeks_per_month, weeks_per_year) = match profile {
            PeriodProfile::Standard => (AVERAGE_WEEKS_PER_MONTH, WEEKS_PER_YEAR),
            PeriodProfile::FourWeekMonth => (FOUR_WEEKS_PER_MONTH, FOUR_WEEK_MONTHS_PER_YEAR),
        };
        Self {
            automation_efficiency: AUTOMATION_EFFICIENCY,
            weeks_per_month,
            weeks_per_year,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SavingsEstimatorError`] if:
    /// - `automation_efficiency` is not in [0, 1]
    /// - `weeks_per_month` is not positive
    /// - `weeks_per_year` is not positive
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use savings_core::{SavingsEstimatorConfig, SavingsEstimatorError};
    ///
    /// let config = SavingsEstimatorConfig {
    ///     automation_efficiency: dec!(1.2),
    ///     ..SavingsEstimatorConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(SavingsEstimatorError::InvalidAutomationEfficiency(dec!(1.2)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), SavingsEstimatorError> {
        if self.automation_efficiency < Decimal::ZERO || self.automation_efficiency > Decimal::ONE
        {
            return Err(SavingsEstimatorError::InvalidAutomationEfficiency(
                self.automation_efficiency,
            ));
        }
        if self.weeks_per_month <= Decimal::ZERO {
            return Err(SavingsEstimatorError::InvalidWeeksPerMonth(
                self.weeks_per_month,
            ));
        }
        if self.weeks_per_year <= Decimal::ZERO {
            return Err(SavingsEstimatorError::InvalidWeeksPerYear(
                self.weeks_per_year,
            ));
        }
        Ok(())
    }
}

impl Default for SavingsEstimatorConfig {
    fn default() -> Self {
        Self::from_profile(PeriodProfile::default())
    }
}

/// Derived time and money savings.
///
/// Values are exact decimals; rounding only happens for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Calls made by the whole team per week.
    pub weekly_calls: Decimal,

    /// Calls made by the whole team per month.
    pub monthly_calls: Decimal,

    /// Minutes of manual CRM entry per week.
    pub weekly_manual_minutes: Decimal,

    /// Minutes of manual CRM entry per month.
    pub monthly_manual_minutes: Decimal,

    /// Minutes saved per week.
    pub weekly_saved_minutes: Decimal,

    /// Minutes saved per month.
    pub monthly_saved_minutes: Decimal,

    /// Minutes saved per year.
    pub yearly_saved_minutes: Decimal,

    /// Hours saved per week.
    pub weekly_saved_hours: Decimal,

    /// Hours saved per month.
    pub monthly_saved_hours: Decimal,

    /// Money saved per week, in PLN.
    pub money_saved_week: Decimal,

    /// Money saved per month, in PLN.
    pub money_saved_month: Decimal,

    /// Money saved per year, in PLN.
    pub money_saved_year: Decimal,
}

impl SavingsEstimate {
    /// An estimate with every value zero.
    pub fn zero() -> Self {
        Self {
            weekly_calls: Decimal::ZERO,
            monthly_calls: Decimal::ZERO,
            weekly_manual_minutes: Decimal::ZERO,
            monthly_manual_minutes: Decimal::ZERO,
            weekly_saved_minutes: Decimal::ZERO,
            monthly_saved_minutes: Decimal::ZERO,
            yearly_saved_minutes: Decimal::ZERO,
            weekly_saved_hours: Decimal::ZERO,
            monthly_saved_hours: Decimal::ZERO,
            money_saved_week: Decimal::ZERO,
            money_saved_month: Decimal::ZERO,
            money_saved_year: Decimal::ZERO,
        }
    }
}

/// Calculator for the savings estimate.
#[derive(Debug, Clone, Default)]
pub struct SavingsEstimator {
    config: SavingsEstimatorConfig,
}

impl SavingsEstimator {
    pub fn new(config: SavingsEstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SavingsEstimatorConfig {
        &self.config
    }

    /// Recomputes every derived value from `input`.
    ///
    /// The result depends only on `input` and the configuration, so calling
    /// this twice with the same input yields identical estimates.
    ///
    /// # Errors
    ///
    /// Returns [`SavingsEstimatorError`] if the configuration is invalid or
    /// an intermediate product leaves the decimal range.
    pub fn calculate(
        &self,
        input: &SavingsInput,
    ) -> Result<SavingsEstimate, SavingsEstimatorError> {
        self.config.validate()?;

        let salespeople = Decimal::from(input.salespeople);

        let weekly_calls = self.weekly_calls(salespeople, input.calls_per_week)?;
        let weekly_manual_minutes =
            self.manual_minutes(weekly_calls, input.admin_minutes_per_call)?;
        let weekly_saved_minutes = self.saved_minutes(weekly_manual_minutes)?;
        let weekly_saved_hours =
            minutes_to_hours(weekly_saved_minutes).ok_or(SavingsEstimatorError::Overflow {
                stage: "weekly saved hours",
            })?;
        let money_saved_week =
            self.money_saved(weekly_saved_hours, input.hourly_cost, salespeople)?;

        let monthly_calls = self.per_month(weekly_calls, "monthly calls")?;
        let monthly_manual_minutes =
            self.per_month(weekly_manual_minutes, "monthly manual minutes")?;
        let monthly_saved_minutes =
            self.per_month(weekly_saved_minutes, "monthly saved minutes")?;
        let monthly_saved_hours =
            minutes_to_hours(monthly_saved_minutes).ok_or(SavingsEstimatorError::Overflow {
                stage: "monthly saved hours",
            })?;
        let money_saved_month = self.per_month(money_saved_week, "money saved per month")?;

        let yearly_saved_minutes = self.per_year(weekly_saved_minutes, "yearly saved minutes")?;
        let money_saved_year = self.per_year(money_saved_week, "money saved per year")?;

        debug!(
            %weekly_calls,
            %weekly_saved_minutes,
            %money_saved_week,
            "savings estimate recomputed"
        );

        Ok(SavingsEstimate {
            weekly_calls,
            monthly_calls,
            weekly_manual_minutes,
            monthly_manual_minutes,
            weekly_saved_minutes,
            monthly_saved_minutes,
            yearly_saved_minutes,
            weekly_saved_hours,
            monthly_saved_hours,
            money_saved_week,
            money_saved_month,
            money_saved_year,
        })
    }

    /// Calculates the team's calls per week.
    fn weekly_calls(
        &self,
        salespeople: Decimal,
        calls_per_week: i64,
    ) -> Result<Decimal, SavingsEstimatorError> {
        checked_mul(salespeople, Decimal::from(calls_per_week), "weekly calls")
    }

    /// Calculates minutes of manual CRM entry.
    fn manual_minutes(
        &self,
        calls: Decimal,
        admin_minutes_per_call: i64,
    ) -> Result<Decimal, SavingsEstimatorError> {
        checked_mul(
            calls,
            Decimal::from(admin_minutes_per_call),
            "weekly manual minutes",
        )
    }

    /// Calculates minutes removed by automation.
    fn saved_minutes(
        &self,
        manual_minutes: Decimal,
    ) -> Result<Decimal, SavingsEstimatorError> {
        checked_mul(
            manual_minutes,
            self.config.automation_efficiency,
            "weekly saved minutes",
        )
    }

    /// Calculates the value of the saved hours.
    ///
    /// The saved hours already cover the whole team and are scaled by the
    /// head count once more, matching the published calculator.
    fn money_saved(
        &self,
        saved_hours: Decimal,
        hourly_cost: i64,
        salespeople: Decimal,
    ) -> Result<Decimal, SavingsEstimatorError> {
        let stage = "money saved per week";
        let cost = checked_mul(saved_hours, Decimal::from(hourly_cost), stage)?;
        checked_mul(cost, salespeople, stage)
    }

    fn per_month(
        &self,
        weekly: Decimal,
        stage: &'static str,
    ) -> Result<Decimal, SavingsEstimatorError> {
        checked_mul(weekly, self.config.weeks_per_month, stage)
    }

    fn per_year(
        &self,
        weekly: Decimal,
        stage: &'static str,
    ) -> Result<Decimal, SavingsEstimatorError> {
        checked_mul(weekly, self.config.weeks_per_year, stage)
    }
}

fn checked_mul(
    a: Decimal,
    b: Decimal,
    stage: &'static str,
) -> Result<Decimal, SavingsEstimatorError> {
    a.checked_mul(b)
        .ok_or(SavingsEstimatorError::Overflow { stage })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_input() -> SavingsInput {
        SavingsInput {
            salespeople: 5,
            calls_per_week: 20,
            call_duration: 30,
            admin_minutes_per_call: 15,
            hourly_cost: 100,
        }
    }

    fn standard() -> SavingsEstimator {
        SavingsEstimator::new(SavingsEstimatorConfig::from_profile(
            PeriodProfile::Standard,
        ))
    }

    fn four_week() -> SavingsEstimator {
        SavingsEstimator::new(SavingsEstimatorConfig::from_profile(
            PeriodProfile::FourWeekMonth,
        ))
    }

    // =========================================================================
    // config tests
    // =========================================================================

    #[test]
    fn default_config_uses_standard_profile() {
        let config = SavingsEstimatorConfig::default();

        assert_eq!(config.automation_efficiency, dec!(0.85));
        assert_eq!(config.weeks_per_month, dec!(4.33));
        assert_eq!(config.weeks_per_year, dec!(52));
    }

    #[test]
    fn validate_accepts_profiles() {
        assert_eq!(
            SavingsEstimatorConfig::from_profile(PeriodProfile::Standard).validate(),
            Ok(())
        );
        assert_eq!(
            SavingsEstimatorConfig::from_profile(PeriodProfile::FourWeekMonth).validate(),
            Ok(())
        );
    }

    #[test]
    fn validate_accepts_efficiency_bounds() {
        let mut config = SavingsEstimatorConfig::default();

        config.automation_efficiency = dec!(0);
        assert_eq!(config.validate(), Ok(()));

        config.automation_efficiency = dec!(1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_efficiency() {
        let config = SavingsEstimatorConfig {
            automation_efficiency: dec!(-0.1),
            ..SavingsEstimatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SavingsEstimatorError::InvalidAutomationEfficiency(dec!(-0.1)))
        );
    }

    #[test]
    fn validate_rejects_zero_weeks_per_month() {
        let config = SavingsEstimatorConfig {
            weeks_per_month: dec!(0),
            ..SavingsEstimatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SavingsEstimatorError::InvalidWeeksPerMonth(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_weeks_per_year() {
        let config = SavingsEstimatorConfig {
            weeks_per_year: dec!(-52),
            ..SavingsEstimatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SavingsEstimatorError::InvalidWeeksPerYear(dec!(-52)))
        );
    }

    #[test]
    fn calculate_reports_invalid_config() {
        let estimator = SavingsEstimator::new(SavingsEstimatorConfig {
            weeks_per_month: dec!(-1),
            ..SavingsEstimatorConfig::default()
        });

        let result = estimator.calculate(&test_input());

        assert_eq!(
            result,
            Err(SavingsEstimatorError::InvalidWeeksPerMonth(dec!(-1)))
        );
    }

    // =========================================================================
    // step tests
    // =========================================================================

    #[test]
    fn weekly_calls_multiplies_team_by_calls() {
        let result = standard().weekly_calls(dec!(5), 20);

        assert_eq!(result, Ok(dec!(100)));
    }

    #[test]
    fn manual_minutes_multiplies_calls_by_admin_time() {
        let result = standard().manual_minutes(dec!(100), 15);

        assert_eq!(result, Ok(dec!(1500)));
    }

    #[test]
    fn saved_minutes_applies_efficiency() {
        let result = standard().saved_minutes(dec!(1500));

        assert_eq!(result, Ok(dec!(1275)));
    }

    #[test]
    fn money_saved_scales_by_cost_and_team() {
        let result = standard().money_saved(dec!(21.25), 100, dec!(5));

        assert_eq!(result, Ok(dec!(10625)));
    }

    // =========================================================================
    // calculate (standard profile) tests
    // =========================================================================

    #[test]
    fn calculate_standard_case() {
        let result = standard().calculate(&test_input()).unwrap();

        assert_eq!(result.weekly_calls, dec!(100));
        assert_eq!(result.weekly_manual_minutes, dec!(1500));
        assert_eq!(result.weekly_saved_minutes, dec!(1275));
        assert_eq!(result.weekly_saved_hours, dec!(21.25));
        assert_eq!(result.money_saved_week, dec!(10625));
        // 10625 * 4.33
        assert_eq!(result.money_saved_month, dec!(46006.25));
        // 10625 * 52
        assert_eq!(result.money_saved_year, dec!(552500));
    }

    #[test]
    fn calculate_monthly_figures_scale_weekly() {
        let result = standard().calculate(&test_input()).unwrap();

        assert_eq!(result.monthly_calls, dec!(433));
        assert_eq!(result.monthly_manual_minutes, dec!(6495));
        // 1275 * 4.33 = 5520.75
        assert_eq!(result.monthly_saved_minutes, dec!(5520.75));
        // 5520.75 / 60
        assert_eq!(result.monthly_saved_hours, dec!(92.0125));
        // 1275 * 52
        assert_eq!(result.yearly_saved_minutes, dec!(66300));
    }

    #[test]
    fn calculate_saved_is_exact_fraction_of_manual() {
        let estimator = standard();
        let inputs = [
            SavingsInput::default(),
            SavingsInput {
                salespeople: 7,
                calls_per_week: 33,
                call_duration: 12,
                admin_minutes_per_call: 11,
                hourly_cost: 87,
            },
            SavingsInput {
                salespeople: 1,
                calls_per_week: 1,
                call_duration: 1,
                admin_minutes_per_call: 1,
                hourly_cost: 1,
            },
        ];

        for input in inputs {
            let result = estimator.calculate(&input).unwrap();
            assert_eq!(
                result.weekly_saved_minutes,
                result.weekly_manual_minutes * dec!(0.85)
            );
            assert_eq!(
                result.money_saved_month,
                result.money_saved_week * dec!(4.33)
            );
            assert_eq!(result.money_saved_year, result.money_saved_week * dec!(52));
        }
    }

    #[test]
    fn calculate_all_zero_inputs_yield_zero() {
        let result = standard().calculate(&SavingsInput::zero()).unwrap();

        assert_eq!(result, SavingsEstimate::zero());
    }

    #[test]
    fn calculate_zero_salespeople_zeroes_time_and_money() {
        let mut input = test_input();
        input.salespeople = 0;

        let result = standard().calculate(&input).unwrap();

        assert_eq!(result, SavingsEstimate::zero());
    }

    #[test]
    fn calculate_zero_calls_zeroes_time_and_money() {
        let mut input = test_input();
        input.calls_per_week = 0;

        let result = standard().calculate(&input).unwrap();

        assert_eq!(result, SavingsEstimate::zero());
    }

    #[test]
    fn calculate_zero_cost_keeps_time_savings() {
        let mut input = test_input();
        input.hourly_cost = 0;

        let result = standard().calculate(&input).unwrap();

        assert_eq!(result.weekly_saved_minutes, dec!(1275));
        assert_eq!(result.money_saved_week, dec!(0));
        assert_eq!(result.money_saved_year, dec!(0));
    }

    #[test]
    fn calculate_ignores_call_duration() {
        let estimator = standard();
        let mut long_calls = test_input();
        long_calls.call_duration = 240;

        let baseline = estimator.calculate(&test_input()).unwrap();
        let result = estimator.calculate(&long_calls).unwrap();

        assert_eq!(result, baseline);
    }

    #[test]
    fn calculate_is_idempotent() {
        let estimator = standard();
        let input = test_input();

        let first = estimator.calculate(&input).unwrap();
        let second = estimator.calculate(&input).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn calculate_passes_negative_input_through() {
        let mut input = test_input();
        input.calls_per_week = -20;

        let result = standard().calculate(&input).unwrap();

        assert_eq!(result.weekly_calls, dec!(-100));
        assert_eq!(result.money_saved_week, dec!(-10625));
    }

    #[test]
    fn calculate_reports_overflow() {
        let input = SavingsInput {
            salespeople: i64::MAX,
            calls_per_week: i64::MAX,
            call_duration: 0,
            admin_minutes_per_call: i64::MAX,
            hourly_cost: i64::MAX,
        };

        let result = standard().calculate(&input);

        assert!(matches!(
            result,
            Err(SavingsEstimatorError::Overflow { .. })
        ));
    }

    #[test]
    fn errors_are_cloneable() {
        let err = standard()
            .calculate(&SavingsInput {
                salespeople: i64::MAX,
                ..SavingsInput::default()
            })
            .unwrap_err();

        assert_eq!(err.clone(), err);
    }

    #[test]
    fn calculate_uses_custom_efficiency() {
        let estimator = SavingsEstimator::new(SavingsEstimatorConfig {
            automation_efficiency: dec!(0.5),
            ..SavingsEstimatorConfig::default()
        });

        let result = estimator.calculate(&test_input()).unwrap();

        assert_eq!(result.weekly_saved_minutes, dec!(750));
        assert_eq!(result.weekly_saved_hours, dec!(12.5));
    }

    // =========================================================================
    // calculate (four-week profile) tests
    // =========================================================================

    #[test]
    fn calculate_four_week_matches_published_figures() {
        let result = four_week().calculate(&test_input()).unwrap();

        assert_eq!(result.monthly_calls, dec!(400));
        assert_eq!(result.monthly_manual_minutes, dec!(6000));
        assert_eq!(result.monthly_saved_minutes, dec!(5100));
        assert_eq!(result.monthly_saved_hours, dec!(85));
        assert_eq!(result.weekly_saved_minutes, dec!(1275));
        assert_eq!(result.money_saved_week, dec!(10625));
        assert_eq!(result.money_saved_month, dec!(42500));
        // twelve four-week months
        assert_eq!(result.money_saved_year, dec!(510000));
    }
}
