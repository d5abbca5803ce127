use serde::{Deserialize, Serialize};

/// Identifies one of the calculator's input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Salespeople,
    CallsPerWeek,
    CallDuration,
    AdminMinutesPerCall,
    HourlyCost,
}

impl InputField {
    /// Every field, in form order.
    pub const ALL: [InputField; 5] = [
        Self::Salespeople,
        Self::CallsPerWeek,
        Self::CallDuration,
        Self::AdminMinutesPerCall,
        Self::HourlyCost,
    ];

    /// Stable identifier of the field (the form control id).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salespeople => "salespeople",
            Self::CallsPerWeek => "calls",
            Self::CallDuration => "duration",
            Self::AdminMinutesPerCall => "crmTime",
            Self::HourlyCost => "cost",
        }
    }

    /// Parses a field identifier.
    ///
    /// Accepts the form control id and the snake_case struct field name,
    /// ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salespeople" => Some(Self::Salespeople),
            "calls" | "calls_per_week" => Some(Self::CallsPerWeek),
            "duration" | "call_duration" => Some(Self::CallDuration),
            "crmtime" | "admin_minutes_per_call" | "time_per_call" => {
                Some(Self::AdminMinutesPerCall)
            }
            "cost" | "hourly_cost" => Some(Self::HourlyCost),
            _ => None,
        }
    }

    /// Polish form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salespeople => "Ilość handlowców",
            Self::CallsPerWeek => "Ilość rozmów tygodniowo (na handlowca)",
            Self::CallDuration => "Czas jednej rozmowy (minuty)",
            Self::AdminMinutesPerCall => {
                "Czas na uzupełnienie CRM (notatka, pola, zadania) i draft (minuty)"
            }
            Self::HourlyCost => "Koszt godziny handlowca (PLN)",
        }
    }
}
