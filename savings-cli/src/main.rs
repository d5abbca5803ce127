use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use savings_core::{InputField, PeriodProfile, SavingsEstimator};
use tracing::{debug, info};

use savings_cli::{AppConfig, CalculatorState, ResultsPanel, logging, run_session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Savings calculator for automated CRM entry after sales calls.
///
/// Prints the estimated time and money a sales team saves when call notes,
/// CRM fields and follow-up drafts are filled in automatically.
#[derive(Debug, Parser)]
#[command(name = "savings-calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with estimator settings and default inputs.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Month/year scaling: `standard` (4.33 weeks, 52-week year) or
    /// `four-week` (4 weeks, 48-week year).
    #[arg(short, long)]
    profile: Option<PeriodProfile>,

    /// Number of salespeople.
    #[arg(long)]
    salespeople: Option<String>,

    /// Calls per salesperson per week.
    #[arg(long)]
    calls_per_week: Option<String>,

    /// Minutes per call (shown, not used in the estimate).
    #[arg(long)]
    call_duration: Option<String>,

    /// Minutes of manual CRM entry per call.
    #[arg(long)]
    admin_minutes: Option<String>,

    /// Cost of one salesperson hour, in PLN.
    #[arg(long)]
    hourly_cost: Option<String>,

    /// Read edits from stdin and re-render after each one.
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Log filter, e.g. `debug` or `warn,savings_cli=debug`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    /// Raw form values given on the command line.
    fn field_values(&self) -> [(InputField, Option<&str>); 5] {
        [
            (InputField::Salespeople, self.salespeople.as_deref()),
            (InputField::CallsPerWeek, self.calls_per_week.as_deref()),
            (InputField::CallDuration, self.call_duration.as_deref()),
            (InputField::AdminMinutesPerCall, self.admin_minutes.as_deref()),
            (InputField::HourlyCost, self.hourly_cost.as_deref()),
        ]
    }
}

// ─── setup ───────────────────────────────────────────────────────────────────

fn configure_logging(cli: &Cli) -> Result<()> {
    logging::init_logging();
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

fn build_state(cli: &Cli) -> Result<CalculatorState> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };

    let estimator_config = config.estimator_config(cli.profile);
    debug!(?estimator_config, "estimator configured");

    let inputs = config.initial_inputs_with(&cli.field_values());

    let state = CalculatorState::new(SavingsEstimator::new(estimator_config), inputs)
        .context("Cannot compute the initial estimate from these settings and inputs")?;

    Ok(state.with_on_change(|inputs, results| {
        debug!(?inputs, money_saved_week = %results.money_saved_week, "recomputed");
    }))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logging(&cli)?;

    let mut state = build_state(&cli)?;
    let config = state.estimator().config();
    info!(
        weeks_per_month = %config.weeks_per_month,
        weeks_per_year = %config.weeks_per_year,
        interactive = cli.interactive,
        "savings calculator started"
    );

    let stdout = io::stdout();
    if cli.interactive {
        let stdin = io::stdin();
        run_session(&mut state, stdin.lock(), stdout.lock())?;
    } else {
        let mut out = stdout.lock();
        write!(out, "{}", ResultsPanel::from_state(&state))?;
        out.flush()?;
    }

    Ok(())
}
