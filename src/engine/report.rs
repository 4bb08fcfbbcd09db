//! Report aggregation.
//!
//! Joins per-check results into one deterministic report. Results are
//! emitted in a fixed order regardless of execution order, so reports for
//! the same inputs are diffable across runs (the timestamp is the only
//! varying field). Overall status is a pure function of the four mandatory
//! results; advisory and skipped results never affect it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::orchestrator::ValidationRun;
use crate::{CheckResult, CheckStatus};

/// Overall run outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Pass,
    Fail,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Pass => write!(f, "PASS"),
            OverallStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Count of results by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
    pub skipped: u32,
    pub total: u32,
}

/// The complete validation report for one brief/plan pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub test_case: String,
    pub brief_file: String,
    pub plan_file: String,
    /// RFC 3339, the only field that differs between identical runs
    pub timestamp: String,
    pub overall_status: OverallStatus,
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for result in &self.results {
            summary.total += 1;
            match result.status {
                CheckStatus::Pass => summary.passed += 1,
                CheckStatus::Fail => summary.failed += 1,
                CheckStatus::Error => summary.errored += 1,
                CheckStatus::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn has_failures(&self) -> bool {
        self.overall_status == OverallStatus::Fail
    }
}

/// Combine per-check results into the final report.
pub fn aggregate(run: &ValidationRun, mut results: Vec<CheckResult>) -> ValidationReport {
    // Fixed output order, whatever order the fan-out delivered
    results.sort_by_key(|r| r.name);

    let overall_status = if results
        .iter()
        .filter(|r| r.name.is_mandatory())
        .all(|r| r.status == CheckStatus::Pass)
    {
        OverallStatus::Pass
    } else {
        OverallStatus::Fail
    };

    ValidationReport {
        test_case: run.test_case.clone(),
        brief_file: run.brief_file.clone(),
        plan_file: run.plan_file.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        overall_status,
        results,
    }
}
