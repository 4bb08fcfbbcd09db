//! Budget consistency check.
//!
//! Sums the body-section currency amounts and compares the total to the
//! brief's budget under the relative tolerance. Strategy-explainer figures
//! are illustrative and never counted. Zero extracted body amounts is a
//! distinct structural outcome, not a mismatch.

use serde_json::json;

use crate::brief::NormalizedBrief;
use crate::compare::within_relative_tolerance;
use crate::config::ValidationConfig;
use crate::extract::FactSet;
use crate::{CheckName, CheckResult};

pub fn run(facts: &FactSet, brief: &NormalizedBrief, config: &ValidationConfig) -> CheckResult {
    let expected = brief.budget;
    let count = facts.body_amount_count();

    if count == 0 {
        return CheckResult::error(
            CheckName::Budget,
            "no currency amounts found in document body",
            json!({
                "expected": expected,
                "amounts_found": 0,
            }),
        );
    }

    let sum = facts.body_amount_sum();
    let tolerance = config.budget_tolerance;
    let difference = (sum - expected).abs();
    let details = json!({
        "expected": expected,
        "sum": sum,
        "amounts_found": count,
        "tolerance": tolerance,
        "difference": difference,
    });

    if within_relative_tolerance(sum, expected, tolerance) {
        CheckResult::pass(
            CheckName::Budget,
            format!(
                "{} amounts totaling {:.2} match budget {:.2} within {:.0}% tolerance",
                count,
                sum,
                expected,
                tolerance * 100.0
            ),
            details,
        )
    } else {
        CheckResult::fail(
            CheckName::Budget,
            format!(
                "{} amounts totaling {:.2} differ from budget {:.2} by {:.2}, beyond {:.0}% tolerance",
                count,
                sum,
                expected,
                difference,
                tolerance * 100.0
            ),
            details,
        )
    }
}
