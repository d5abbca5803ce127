mod input_field;
mod period_profile;
mod savings_input;

pub use input_field::InputField;
pub use period_profile::PeriodProfile;
pub use savings_input::SavingsInput;
