//! Integration tests that drive the calculator from on-disk fixtures.
//!
//! These complement the unit tests in each module by going through config
//! loading, state construction and the interactive session end to end.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use savings_cli::{AppConfig, CalculatorState, ResultsPanel, run_session};
use savings_core::{SavingsEstimate, SavingsEstimator};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn state_from(config: &AppConfig) -> CalculatorState {
    CalculatorState::new(
        SavingsEstimator::new(config.estimator_config(None)),
        config.initial_inputs(),
    )
    .expect("fixture config should be valid")
}

#[test]
fn four_week_fixture_reproduces_published_figures() {
    let config = AppConfig::load(&fixture("four_week.toml")).expect("fixture should load");
    let state = state_from(&config);
    let r = state.results();

    assert_eq!(r.monthly_calls, dec!(400));
    assert_eq!(r.monthly_manual_minutes, dec!(6000));
    assert_eq!(r.monthly_saved_minutes, dec!(5100));
    assert_eq!(r.weekly_saved_minutes, dec!(1275));
    assert_eq!(r.money_saved_week, dec!(10625));
    assert_eq!(r.money_saved_month, dec!(42500));
    assert_eq!(r.money_saved_year, dec!(510000));
}

#[test]
fn partial_fixture_merges_with_defaults() {
    let config = AppConfig::load(&fixture("team_of_eight.toml")).expect("fixture should load");
    let state = state_from(&config);

    assert_eq!(state.inputs().salespeople, 8);
    assert_eq!(state.inputs().calls_per_week, 20);
    assert_eq!(state.inputs().admin_minutes_per_call, 15);
    assert_eq!(state.inputs().hourly_cost, 120);

    // 160 calls * 15 min * 0.85 = 2040 min = 34 h; 34 * 120 * 8
    assert_eq!(state.results().money_saved_week, dec!(32640));
    assert_eq!(state.results().money_saved_month, dec!(141331.2));
    assert_eq!(state.results().money_saved_year, dec!(1697280));
}

#[test]
fn panel_renders_fixture_state() {
    let config = AppConfig::load(&fixture("team_of_eight.toml")).unwrap();
    let state = state_from(&config);

    let text = ResultsPanel::from_state(&state).to_string();

    assert!(text.contains("  Ilość handlowców: 8\n"));
    assert!(text.contains("    32\u{a0}640\u{a0}zł / tydzień\n"));
    assert!(text.contains("    1\u{a0}697\u{a0}280\u{a0}zł / rok\n"));
}

#[test]
fn edit_script_runs_until_quit() {
    let mut state = state_from(&AppConfig::default());
    let script = File::open(fixture("edit_script.txt")).expect("script should open");
    let mut out = Vec::new();

    run_session(&mut state, BufReader::new(script), &mut out).expect("session should finish");
    let text = String::from_utf8(out).unwrap();

    // initial, salespeople 10, cost 3.9, show, salespeople=
    assert_eq!(text.matches("Dane wejściowe").count(), 5);
    assert!(text.contains("Pominięto 'abc': calls = 20"));
    assert!(text.contains("Nieznane polecenie: budget 5"));
    // 200 calls * 15 min * 0.85 = 42.5 h; 42.5 * 3 * 10
    assert!(text.contains("    1275\u{a0}zł / tydzień\n"));

    assert_eq!(state.inputs().salespeople, 0);
    assert_eq!(state.inputs().hourly_cost, 3);
    assert_eq!(state.results(), &SavingsEstimate::zero());
}

#[test]
fn load_nonexistent_config_returns_err() {
    let result = AppConfig::load(Path::new("/this/path/does/not/exist.toml"));

    assert!(result.is_err());
}
