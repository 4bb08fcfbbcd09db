//! Full run integration tests.
//!
//! Complete validations over on-disk pairs: the same load path the
//! binary takes, from file reads through the parallel check fan-out to
//! the aggregated report.

use std::io::Write;

use plan_preflight::config::ValidationConfig;
use plan_preflight::engine::report::OverallStatus;
use plan_preflight::{run_validation, CheckStatus, PreflightError, RunOptions};

use crate::fixtures;

fn options(brief: &str, plan: &str) -> (tempfile::TempDir, RunOptions) {
    let dir = tempfile::TempDir::new().unwrap();
    let (brief_path, plan_path) = fixtures::write_pair(&dir, brief, plan);
    let opts = RunOptions {
        brief_path,
        plan_path,
        ai_validation: false,
        config: ValidationConfig::default(),
    };
    (dir, opts)
}

#[test]
fn consistent_pair_passes_end_to_end() {
    let (_dir, opts) = options(fixtures::brief_json(), fixtures::consistent_plan());
    let report = run_validation(&opts).unwrap();

    assert_eq!(report.overall_status, OverallStatus::Pass);
    assert_eq!(report.results.len(), 4);
    for result in &report.results {
        assert_eq!(result.status, CheckStatus::Pass, "{} failed", result.name);
    }
    assert_eq!(report.test_case, "plan");
    assert_eq!(report.brief_file, "brief.json");
    assert_eq!(report.plan_file, "plan.md");
}

#[test]
fn channel_mismatch_fails_in_both_directions() {
    let (_dir, opts) = options(fixtures::brief_json(), fixtures::channel_mismatch_plan());
    let report = run_validation(&opts).unwrap();

    assert_eq!(report.overall_status, OverallStatus::Fail);
    let channel = report
        .results
        .iter()
        .find(|r| r.name.as_str() == "channel_consistency_check")
        .unwrap();
    assert_eq!(channel.status, CheckStatus::Fail);
    assert_eq!(
        channel.details["missing_in_strategy"],
        serde_json::json!(["Google Search"])
    );
    assert_eq!(
        channel.details["missing_in_plan"],
        serde_json::json!(["Meta (Instagram)"])
    );
}

#[test]
fn missing_dates_error_the_duration_check_only() {
    let (_dir, opts) = options(fixtures::brief_json(), fixtures::no_dates_plan());
    let report = run_validation(&opts).unwrap();

    assert_eq!(report.overall_status, OverallStatus::Fail);
    for result in &report.results {
        let expected = if result.name.as_str() == "duration_check" {
            CheckStatus::Error
        } else {
            CheckStatus::Pass
        };
        assert_eq!(result.status, expected, "unexpected status for {}", result.name);
    }
}

#[test]
fn budget_overrun_fails_with_difference_detail() {
    let (_dir, opts) = options(fixtures::brief_json(), fixtures::over_budget_plan());
    let report = run_validation(&opts).unwrap();

    let budget = report
        .results
        .iter()
        .find(|r| r.name.as_str() == "budget_check")
        .unwrap();
    assert_eq!(budget.status, CheckStatus::Fail);
    assert_eq!(budget.details["expected"], serde_json::json!(5000.0));
    assert_eq!(budget.details["sum"], serde_json::json!(6000.0));
}

#[test]
fn config_overlay_widens_the_budget_tolerance() {
    let (dir, mut opts) = options(fixtures::brief_json(), fixtures::over_budget_plan());

    let config_path = dir.path().join("preflight.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "budget_tolerance = 0.25").unwrap();

    opts.config = ValidationConfig::from_file(&config_path).unwrap();
    let report = run_validation(&opts).unwrap();

    let budget = report
        .results
        .iter()
        .find(|r| r.name.as_str() == "budget_check")
        .unwrap();
    assert_eq!(budget.status, CheckStatus::Pass);
}

#[test]
fn missing_brief_file_is_a_fatal_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let plan_path = dir.path().join("plan.md");
    std::fs::write(&plan_path, fixtures::consistent_plan()).unwrap();

    let opts = RunOptions {
        brief_path: dir.path().join("missing.json"),
        plan_path,
        ai_validation: false,
        config: ValidationConfig::default(),
    };
    match run_validation(&opts) {
        Err(PreflightError::BriefRead { .. }) => {}
        other => panic!("expected BriefRead, got {:?}", other.map(|r| r.overall_status)),
    }
}

#[test]
fn malformed_brief_json_is_a_fatal_parse_error() {
    let (_dir, opts) = options("{ not json", fixtures::consistent_plan());
    match run_validation(&opts) {
        Err(PreflightError::BriefParse { .. }) => {}
        other => panic!("expected BriefParse, got {:?}", other.map(|r| r.overall_status)),
    }
}

#[test]
fn review_without_credential_degrades_to_skipped() {
    // The credential must be absent for the degradation path to trigger.
    std::env::remove_var(plan_preflight::ai::API_KEY_ENV);

    let (_dir, mut opts) = options(fixtures::brief_json(), fixtures::consistent_plan());
    opts.ai_validation = true;
    let report = run_validation(&opts).unwrap();

    assert_eq!(report.overall_status, OverallStatus::Pass);
    assert_eq!(report.results.len(), 5);
    let review = report.results.last().unwrap();
    assert_eq!(review.name.as_str(), "ai_strategy_review");
    assert_eq!(review.status, CheckStatus::Skipped);
}

#[test]
fn repeated_runs_differ_only_in_timestamp() {
    let (_dir, opts) = options(fixtures::brief_json(), fixtures::consistent_plan());
    let mut a = run_validation(&opts).unwrap();
    let mut b = run_validation(&opts).unwrap();
    a.timestamp = String::new();
    b.timestamp = String::new();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
