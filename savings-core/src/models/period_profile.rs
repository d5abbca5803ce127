use serde::{Deserialize, Serialize};

/// How weekly figures are scaled to months and years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodProfile {
    /// Average month of 4.33 weeks, 52-week year.
    #[default]
    Standard,
    /// Flat four-week month, year of twelve such months (48 weeks).
    #[serde(rename = "four-week", alias = "four-week-month")]
    FourWeekMonth,
}

impl PeriodProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::FourWeekMonth => "four-week",
        }
    }

    /// Parses a profile name, ignoring surrounding whitespace and ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "four-week" | "four-week-month" => Some(Self::FourWeekMonth),
            _ => None,
        }
    }
}

impl std::fmt::Display for PeriodProfile {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeriodProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown period profile '{s}'"))
    }
}
