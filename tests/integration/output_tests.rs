//! Output formatter integration tests.
//!
//! Formatters are exercised against reports produced by real runs, not
//! hand-assembled ones, so the rendered shape tracks the engine's output.

use plan_preflight::cli::args::OutputFormat;
use plan_preflight::cli::output::{get_formatter, JsonFormatter, OutputFormatter, TerminalFormatter};
use plan_preflight::config::ValidationConfig;
use plan_preflight::{run_validation, Report, RunOptions};

use crate::fixtures;

fn passing_report() -> Report {
    let dir = tempfile::TempDir::new().unwrap();
    let (brief_path, plan_path) =
        fixtures::write_pair(&dir, fixtures::brief_json(), fixtures::consistent_plan());
    run_validation(&RunOptions {
        brief_path,
        plan_path,
        ai_validation: false,
        config: ValidationConfig::default(),
    })
    .unwrap()
}

fn failing_report() -> Report {
    let dir = tempfile::TempDir::new().unwrap();
    let (brief_path, plan_path) =
        fixtures::write_pair(&dir, fixtures::brief_json(), fixtures::over_budget_plan());
    run_validation(&RunOptions {
        brief_path,
        plan_path,
        ai_validation: false,
        config: ValidationConfig::default(),
    })
    .unwrap()
}

#[test]
fn terminal_output_lists_every_check_and_the_overall_status() {
    let output = TerminalFormatter::new(false, false, false).format(&passing_report());

    assert!(output.contains("[PASS] budget_check"));
    assert!(output.contains("[PASS] duration_check"));
    assert!(output.contains("[PASS] channel_consistency_check"));
    assert!(output.contains("[PASS] creative_check"));
    assert!(output.contains("Overall: PASS"));
    assert!(output.contains("4 passed, 0 failed, 0 errored, 0 skipped"));
}

#[test]
fn quiet_mode_hides_passing_checks() {
    let output = TerminalFormatter::new(false, false, true).format(&failing_report());

    assert!(!output.contains("[PASS]"));
    assert!(output.contains("[FAIL] budget_check"));
    assert!(output.contains("Overall: FAIL"));
}

#[test]
fn uncolored_output_carries_no_escape_codes() {
    let output = TerminalFormatter::new(false, true, false).format(&failing_report());
    assert!(!output.contains('\x1b'));
}

#[test]
fn json_output_round_trips_with_camel_case_keys() {
    let report = passing_report();
    let output = JsonFormatter::new(true).format(&report);

    assert!(output.contains("\"overallStatus\""));
    assert!(output.contains("\"testCase\""));
    let parsed: Report = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.overall_status, report.overall_status);
    assert_eq!(parsed.results.len(), report.results.len());
}

#[test]
fn formatter_selection_follows_the_format_flag() {
    let report = passing_report();
    let json = get_formatter(OutputFormat::Json, false, false, false).format(&report);
    assert!(serde_json::from_str::<Report>(&json).is_ok());

    let text = get_formatter(OutputFormat::Text, false, false, false).format(&report);
    assert!(text.contains("plan-preflight validation report"));
}
