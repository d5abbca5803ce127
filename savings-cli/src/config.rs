//! Optional TOML configuration for the calculator.
//!
//! ```toml
//! [estimator]
//! profile = "four-week"
//! automation_efficiency = "0.85"
//!
//! [defaults]
//! salespeople = 8
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file,
//! and the file over built-in defaults.

use std::path::Path;

use rust_decimal::Decimal;
use savings_core::{InputField, PeriodProfile, SavingsEstimatorConfig, SavingsInput};
use serde::Deserialize;
use thiserror::Error;

use crate::utils::coerce_whole_number;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub estimator: EstimatorSection,

    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[estimator]` section: period profile and constant overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorSection {
    pub profile: Option<PeriodProfile>,
    pub automation_efficiency: Option<Decimal>,
    pub weeks_per_month: Option<Decimal>,
    pub weeks_per_year: Option<Decimal>,
}

/// `[defaults]` section: initial form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    pub salespeople: Option<i64>,
    pub calls_per_week: Option<i64>,
    pub call_duration: Option<i64>,
    pub admin_minutes_per_call: Option<i64>,
    pub hourly_cost: Option<i64>,
}

impl AppConfig {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the estimator configuration.
    ///
    /// `profile` overrides the file's profile; individual constants from the
    /// file override the profile's values.
    pub fn estimator_config(
        &self,
        profile: Option<PeriodProfile>,
    ) -> SavingsEstimatorConfig {
        let section = &self.estimator;
        let profile = profile.or(section.profile).unwrap_or_default();
        let base = SavingsEstimatorConfig::from_profile(profile);
        SavingsEstimatorConfig {
            automation_efficiency: section
                .automation_efficiency
                .unwrap_or(base.automation_efficiency),
            weeks_per_month: section.weeks_per_month.unwrap_or(base.weeks_per_month),
            weeks_per_year: section.weeks_per_year.unwrap_or(base.weeks_per_year),
        }
    }

    /// Initial inputs: file values over built-in defaults.
    pub fn initial_inputs(&self) -> SavingsInput {
        let d = &self.defaults;
        let base = SavingsInput::default();
        SavingsInput {
            salespeople: d.salespeople.unwrap_or(base.salespeople),
            calls_per_week: d.calls_per_week.unwrap_or(base.calls_per_week),
            call_duration: d.call_duration.unwrap_or(base.call_duration),
            admin_minutes_per_call: d
                .admin_minutes_per_call
                .unwrap_or(base.admin_minutes_per_call),
            hourly_cost: d.hourly_cost.unwrap_or(base.hourly_cost),
        }
    }

    /// Initial inputs with raw command-line values applied on top.
    ///
    /// Each override is coerced like form text; one that is not a number
    /// leaves the file (or built-in) value in place.
    pub fn initial_inputs_with(
        &self,
        overrides: &[(InputField, Option<&str>)],
    ) -> SavingsInput {
        let mut inputs = self.initial_inputs();
        for &(field, raw) in overrides {
            if let Some(value) = raw.and_then(coerce_whole_number) {
                inputs.set(field, value);
            }
        }
        inputs
    }
}
