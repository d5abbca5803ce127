use serde::{Deserialize, Serialize};

use crate::InputField;

/// The five values a user enters into the calculator.
///
/// Values are plain integers as typed into the form. Negative values are
/// not rejected here; they flow through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavingsInput {
    /// Number of sales agents.
    pub salespeople: i64,

    /// Calls made by each agent per week.
    pub calls_per_week: i64,

    /// Minutes per call. Collected and displayed, not used in the arithmetic.
    pub call_duration: i64,

    /// Minutes of manual CRM entry (notes, fields, tasks, drafts) per call.
    pub admin_minutes_per_call: i64,

    /// Cost of one agent hour, in PLN.
    pub hourly_cost: i64,
}

impl SavingsInput {
    pub const DEFAULT_SALESPEOPLE: i64 = 5;
    pub const DEFAULT_CALLS_PER_WEEK: i64 = 20;
    pub const DEFAULT_CALL_DURATION: i64 = 30;
    pub const DEFAULT_ADMIN_MINUTES_PER_CALL: i64 = 15;
    pub const DEFAULT_HOURLY_COST: i64 = 100;

    /// An input record with every field set to zero.
    pub fn zero() -> Self {
        Self {
            salespeople: 0,
            calls_per_week: 0,
            call_duration: 0,
            admin_minutes_per_call: 0,
            hourly_cost: 0,
        }
    }

    /// Returns the value held for `field`.
    pub fn get(
        &self,
        field: InputField,
    ) -> i64 {
        match field {
            InputField::Salespeople => self.salespeople,
            InputField::CallsPerWeek => self.calls_per_week,
            InputField::CallDuration => self.call_duration,
            InputField::AdminMinutesPerCall => self.admin_minutes_per_call,
            InputField::HourlyCost => self.hourly_cost,
        }
    }

    /// Replaces the value held for `field`.
    pub fn set(
        &mut self,
        field: InputField,
        value: i64,
    ) {
        let slot = match field {
            InputField::Salespeople => &mut self.salespeople,
            InputField::CallsPerWeek => &mut self.calls_per_week,
            InputField::CallDuration => &mut self.call_duration,
            InputField::AdminMinutesPerCall => &mut self.admin_minutes_per_call,
            InputField::HourlyCost => &mut self.hourly_cost,
        };
        *slot = value;
    }

    /// Returns a copy with `field` replaced by `value`.
    pub fn with(
        mut self,
        field: InputField,
        value: i64,
    ) -> Self {
        self.set(field, value);
        self
    }
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            salespeople: Self::DEFAULT_SALESPEOPLE,
            calls_per_week: Self::DEFAULT_CALLS_PER_WEEK,
            call_duration: Self::DEFAULT_CALL_DURATION,
            admin_minutes_per_call: Self::DEFAULT_ADMIN_MINUTES_PER_CALL,
            hourly_cost: Self::DEFAULT_HOURLY_COST,
        }
    }
}
