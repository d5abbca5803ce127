pub mod config;
pub mod logging;
pub mod panel;
pub mod session;
pub mod state;
pub mod utils;

pub use config::{AppConfig, ConfigError};
pub use panel::ResultsPanel;
pub use session::run_session;
pub use state::{CalculatorState, InputOutcome};
