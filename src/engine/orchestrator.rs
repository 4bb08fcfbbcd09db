//! Check execution orchestrator.
//!
//! A validation run is a pure function of (brief, document, config): the
//! extractor and normalizer produce immutable inputs, the four mandatory
//! checks fan out over them in parallel with no shared mutable state, and
//! the aggregator joins the results back into fixed order.
//!
//! # Graceful Degradation
//!
//! - Check panics are caught via `catch_unwind` and converted to ERROR
//!   results; one check can never take down the run.
//! - The advisory review runs after the fan-in (it is the only blocking
//!   call) and degrades to SKIPPED on any failure.
//! - Nothing in this module returns an error; every problem downstream of
//!   input loading lands inside the report.

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use serde_json::Value;

use crate::ai::{self, StrategyReviewer};
use crate::brief::{self, Brief};
use crate::checks;
use crate::config::ValidationConfig;
use crate::document::PlanDocument;
use crate::engine::report::{self, ValidationReport};
use crate::extract;
use crate::{CheckName, CheckResult};

/// Identity of one validation run, carried into the report.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// Test-case identifier (plan file stem by convention)
    pub test_case: String,
    pub brief_file: String,
    pub plan_file: String,
}

/// Execute a full validation: extract, normalize, fan out the mandatory
/// checks, optionally run the advisory review, aggregate.
pub fn run(
    run: &ValidationRun,
    brief: &Brief,
    document: &PlanDocument,
    config: &ValidationConfig,
    reviewer: Option<&dyn StrategyReviewer>,
) -> ValidationReport {
    let facts = extract::extract(document, config);
    let normalized = brief::normalize(brief, config);

    tracing::debug!(
        amounts = facts.amounts.len(),
        table_channels = facts.table_channels.len(),
        strategy_channels = facts.strategy_channels.len(),
        gaps = facts.gaps.len(),
        "facts extracted"
    );

    let mut results = run_mandatory_fanout(&facts, &normalized, config);

    if let Some(reviewer) = reviewer {
        results.push(ai::run_check(reviewer, brief, &facts.strategy_text));
    }

    report::aggregate(run, results)
}

/// Run the four mandatory checks in parallel over shared read-only inputs.
fn run_mandatory_fanout(
    facts: &extract::FactSet,
    normalized: &brief::NormalizedBrief,
    config: &ValidationConfig,
) -> Vec<CheckResult> {
    thread::scope(|scope| {
        let handles: Vec<_> = CheckName::MANDATORY
            .iter()
            .map(|&name| {
                scope.spawn(move || {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                        checks::run_mandatory(name, facts, normalized, config)
                    }));
                    outcome.unwrap_or_else(|_| {
                        CheckResult::error(name, "check panicked during execution", Value::Null)
                    })
                })
            })
            .collect();

        CheckName::MANDATORY
            .iter()
            .zip(handles)
            .map(|(&name, handle)| {
                handle.join().unwrap_or_else(|_| {
                    CheckResult::error(name, "check thread failed", Value::Null)
                })
            })
            .collect()
    })
}
