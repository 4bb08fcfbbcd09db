//! Campaign duration check.
//!
//! Compares the inclusive day count of the extracted date range to the
//! brief's duration under the absolute day tolerance. A missing boundary
//! is a structural gap and reports ERROR, never FAIL.

use serde_json::json;

use crate::brief::NormalizedBrief;
use crate::compare::within_day_tolerance;
use crate::config::ValidationConfig;
use crate::extract::{FactSet, StructuralGap};
use crate::{CheckName, CheckResult};

pub fn run(facts: &FactSet, brief: &NormalizedBrief, config: &ValidationConfig) -> CheckResult {
    let range = match facts.date_range() {
        Some(range) => range,
        None => {
            let mut missing = Vec::new();
            if facts.has_gap(StructuralGap::MissingStartDate) {
                missing.push("start date");
            }
            if facts.has_gap(StructuralGap::MissingEndDate) {
                missing.push("end date");
            }
            return CheckResult::error(
                CheckName::Duration,
                format!("could not extract campaign dates: {}", missing.join(", ")),
                json!({
                    "expected_days": brief.duration_days,
                    "missing": missing,
                }),
            );
        }
    };

    let actual = range.inclusive_days();
    let expected = brief.duration_days;
    let tolerance = config.duration_tolerance_days;
    let details = json!({
        "expected_days": expected,
        "actual_days": actual,
        "start_date": range.start.to_string(),
        "end_date": range.end.to_string(),
        "tolerance_days": tolerance,
    });

    if within_day_tolerance(actual, expected, tolerance) {
        let qualifier = if actual == expected {
            "exactly".to_string()
        } else {
            format!("within {} day tolerance", tolerance)
        };
        CheckResult::pass(
            CheckName::Duration,
            format!("campaign duration of {} days matches {}", actual, qualifier),
            details,
        )
    } else {
        CheckResult::fail(
            CheckName::Duration,
            format!(
                "duration mismatch: expected {} days, got {} days",
                expected, actual
            ),
            details,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PlanDocument;
    use crate::extract;
    use crate::CheckStatus;
    use std::collections::BTreeSet;

    fn brief(days: i64) -> NormalizedBrief {
        NormalizedBrief {
            budget: 0.0,
            duration_days: days,
            intended_channels: BTreeSet::new(),
            required_asset_types: BTreeSet::new(),
        }
    }

    fn facts_from(raw: &str) -> FactSet {
        let config = ValidationConfig::default();
        extract::extract(&PlanDocument::parse(raw, &config), &config)
    }

    #[test]
    fn exact_duration_passes() {
        let facts = facts_from("Start Date: 2026-03-01\nEnd Date: 2026-03-30\n");
        let result = run(&facts, &brief(30), &ValidationConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details["actual_days"], 30);
    }

    #[test]
    fn one_day_off_is_within_default_tolerance() {
        let facts = facts_from("Start Date: 2026-03-01\nEnd Date: 2026-03-31\n");
        let result = run(&facts, &brief(30), &ValidationConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn two_days_off_fails() {
        let facts = facts_from("Start Date: 2026-03-01\nEnd Date: 2026-04-01\n");
        let result = run(&facts, &brief(30), &ValidationConfig::default());
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.details["actual_days"], 32);
        assert_eq!(result.details["expected_days"], 30);
    }

    #[test]
    fn missing_dates_report_error_not_fail() {
        let facts = facts_from("A plan with no dates.\n");
        let result = run(&facts, &brief(30), &ValidationConfig::default());
        assert_eq!(result.status, CheckStatus::Error);
        assert!(result.message.contains("start date"));
        assert!(result.message.contains("end date"));
    }

    #[test]
    fn missing_end_date_alone_is_still_an_error() {
        let facts = facts_from("Start Date: 2026-03-01\n");
        let result = run(&facts, &brief(30), &ValidationConfig::default());
        assert_eq!(result.status, CheckStatus::Error);
        assert!(!result.message.contains("start date,"));
        assert!(result.message.contains("end date"));
    }
}
