use std::fmt;

use savings_core::{InputField, SavingsEstimate, SavingsInput};

use crate::state::CalculatorState;
use crate::utils::{format_currency, format_time, format_whole, input_display};

pub const TITLE: &str = "Kalkulator Oszczędności CallOS";

pub const SUBTITLE: &str = "Oblicz, ile czasu i pieniędzy odzyskasz, gdy CallOS automatycznie \
    wypełni CRM i przygotuje podsumowania rozmów za Twój zespół";

pub const FOOTNOTE: &str = "Kalkulacja oparta na rzeczywistych danych z wdrożeń CallOS. \
    Nie uwzględnia dodatkowych korzyści: lepszej jakości danych w CRM, automatycznego \
    feedbacku dla zespołu i przygotowanych podsumowań dla klientów";

/// Read-only text rendering of the calculator inputs and results.
#[derive(Debug, Clone, Copy)]
pub struct ResultsPanel<'a> {
    inputs: &'a SavingsInput,
    results: &'a SavingsEstimate,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(
        inputs: &'a SavingsInput,
        results: &'a SavingsEstimate,
    ) -> Self {
        Self { inputs, results }
    }

    pub fn from_state(state: &'a CalculatorState) -> Self {
        Self::new(state.inputs(), state.results())
    }
}

impl fmt::Display for ResultsPanel<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.results;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;

        writeln!(f, "Dane wejściowe")?;
        for field in InputField::ALL {
            writeln!(
                f,
                "  {}: {}",
                field.label(),
                input_display(self.inputs.get(field))
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Twoje potencjalne oszczędności")?;
        writeln!(
            f,
            "  Liczba rozmów miesięcznie: {}",
            format_whole(r.monthly_calls)
        )?;
        writeln!(
            f,
            "  Czas wprowadzania do CRM i draft (miesięcznie): {}",
            format_time(r.monthly_manual_minutes)
        )?;
        writeln!(f, "  Oszczędność czasu:")?;
        writeln!(f, "    {} / tydzień", format_time(r.weekly_saved_minutes))?;
        writeln!(f, "    {} / miesiąc", format_time(r.monthly_saved_minutes))?;
        writeln!(
            f,
            "    ({} godz miesięcznie)",
            format_whole(r.monthly_saved_hours)
        )?;
        writeln!(f, "  Oszczędność finansowa:")?;
        writeln!(f, "    {} / tydzień", format_currency(r.money_saved_week))?;
        writeln!(f, "    {} / miesiąc", format_currency(r.money_saved_month))?;
        writeln!(f, "    {} / rok", format_currency(r.money_saved_year))?;
        writeln!(f)?;

        writeln!(f, "{FOOTNOTE}")
    }
}
