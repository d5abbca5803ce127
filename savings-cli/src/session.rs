//! Line-oriented interactive session over a [`CalculatorState`].
//!
//! Each line is either an edit (`<field> <value>` or `<field>=<value>`) or a
//! command. Applied edits re-render the results panel.

use std::io::{BufRead, Write};

use anyhow::Result;
use savings_core::InputField;
use tracing::debug;

use crate::panel::ResultsPanel;
use crate::state::{CalculatorState, InputOutcome};

const HELP: &str = "\
Polecenia:
  <pole> <wartość>   zmień wartość pola (również <pole>=<wartość>)
  show               pokaż wyniki
  reset              przywróć wartości początkowe
  help               ta pomoc
  quit               zakończ
Pola: salespeople, calls, duration, crmTime, cost";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Edit { field: InputField, raw: &'a str },
    Show,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses one line; blank lines and `#` comments give `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (head, rest) = match line.split_once('=') {
            Some((head, rest)) => (head.trim(), Some(rest.trim())),
            None => match line.split_once(char::is_whitespace) {
                Some((head, rest)) => (head, Some(rest.trim())),
                None => (line, None),
            },
        };

        let command = match (head, rest) {
            ("show", None) => Self::Show,
            ("reset", None) => Self::Reset,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            (name, raw) => match InputField::parse(name) {
                Some(field) => Self::Edit {
                    field,
                    raw: raw.unwrap_or(""),
                },
                None => Self::Unknown(line),
            },
        };
        Some(command)
    }
}

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut CalculatorState,
    reader: R,
    mut writer: W,
) -> Result<()> {
    write!(writer, "{}", ResultsPanel::from_state(state))?;

    for line in reader.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        debug!(?command, "session command");

        match command {
            Command::Edit { field, raw } => match state.handle_input(field, raw) {
                InputOutcome::Applied(_) => {
                    writeln!(writer)?;
                    write!(writer, "{}", ResultsPanel::from_state(state))?;
                }
                InputOutcome::Ignored => {
                    writeln!(
                        writer,
                        "Pominięto '{raw}': {} = {}",
                        field.as_str(),
                        state.inputs().get(field)
                    )?;
                }
                InputOutcome::Rejected(e) => {
                    writeln!(writer, "Odrzucono '{raw}' dla {}: {e}", field.as_str())?;
                }
            },
            Command::Show => write!(writer, "{}", ResultsPanel::from_state(state))?,
            Command::Reset => {
                state.reset()?;
                write!(writer, "{}", ResultsPanel::from_state(state))?;
            }
            Command::Help => writeln!(writer, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(writer, "Nieznane polecenie: {text} (wpisz 'help')")?;
            }
        }
        writer.flush()?;
    }

    Ok(())
}
