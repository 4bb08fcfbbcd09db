//! plan-preflight library
//!
//! Cross-validates a structured JSON campaign brief against the
//! semi-structured media-plan document a planner produced from it.
//!
//! The pipeline: parse the plan document into sections and a media-plan
//! table, extract typed facts from it (currency amounts, a date range,
//! channel mentions, creative assets), project the brief into the same
//! vocabulary, run tolerance-aware consistency checks, and aggregate the
//! outcomes into one deterministic report.
//!
//! # Example
//!
//! ```no_run
//! use plan_preflight::{run_validation, RunOptions};
//! use plan_preflight::config::ValidationConfig;
//!
//! let opts = RunOptions {
//!     brief_path: "brief.json".into(),
//!     plan_path: "plan.md".into(),
//!     ai_validation: false,
//!     config: ValidationConfig::default(),
//! };
//! let report = run_validation(&opts).expect("validation failed");
//! println!("overall: {}", report.overall_status);
//! ```

pub mod ai;
pub mod brief;
pub mod checks;
pub mod cli;
pub mod compare;
pub mod config;
pub mod document;
pub mod engine;
pub mod extract;
pub mod version;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use brief::Brief;
use config::ValidationConfig;
use document::PlanDocument;
use engine::orchestrator::ValidationRun;
use engine::report::ValidationReport;

// Re-exports for the public API
pub use engine::report::{OverallStatus, ValidationReport as Report};

/// Outcome status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Values were extracted and satisfy the tolerance/equality rule
    Pass,
    /// Values were extracted but violate the rule
    Fail,
    /// The document did not match the structure the check needed
    Error,
    /// The check did not run (advisory checks only)
    Skipped,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Error => write!(f, "ERROR"),
            CheckStatus::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Identity of a check. The variant order is the order results appear in
/// every report, independent of execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckName {
    Budget,
    Duration,
    ChannelConsistency,
    Creative,
    AiStrategyReview,
}

impl CheckName {
    /// The four checks whose outcomes determine overall status.
    pub const MANDATORY: [CheckName; 4] = [
        CheckName::Budget,
        CheckName::Duration,
        CheckName::ChannelConsistency,
        CheckName::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::Budget => "budget_check",
            CheckName::Duration => "duration_check",
            CheckName::ChannelConsistency => "channel_consistency_check",
            CheckName::Creative => "creative_check",
            CheckName::AiStrategyReview => "ai_strategy_review",
        }
    }

    pub fn is_mandatory(&self) -> bool {
        Self::MANDATORY.contains(self)
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a single validation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name, unique within a report
    #[serde(with = "check_name_serde")]
    pub name: CheckName,
    /// Outcome status
    pub status: CheckStatus,
    /// Human-readable summary
    pub message: String,
    /// Structured detail (expected vs actual, tolerance, missing items)
    pub details: serde_json::Value,
}

impl CheckResult {
    pub fn pass(name: CheckName, message: impl Into<String>, details: serde_json::Value) -> Self {
        CheckResult {
            name,
            status: CheckStatus::Pass,
            message: message.into(),
            details,
        }
    }

    pub fn fail(name: CheckName, message: impl Into<String>, details: serde_json::Value) -> Self {
        CheckResult {
            name,
            status: CheckStatus::Fail,
            message: message.into(),
            details,
        }
    }

    pub fn error(name: CheckName, message: impl Into<String>, details: serde_json::Value) -> Self {
        CheckResult {
            name,
            status: CheckStatus::Error,
            message: message.into(),
            details,
        }
    }

    pub fn skipped(name: CheckName, reason: impl Into<String>) -> Self {
        CheckResult {
            name,
            status: CheckStatus::Skipped,
            message: reason.into(),
            details: serde_json::Value::Null,
        }
    }
}

mod check_name_serde {
    use super::CheckName;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(name: &CheckName, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(name.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<CheckName, D::Error> {
        let s = String::deserialize(de)?;
        match s.as_str() {
            "budget_check" => Ok(CheckName::Budget),
            "duration_check" => Ok(CheckName::Duration),
            "channel_consistency_check" => Ok(CheckName::ChannelConsistency),
            "creative_check" => Ok(CheckName::Creative),
            "ai_strategy_review" => Ok(CheckName::AiStrategyReview),
            other => Err(de::Error::custom(format!("unknown check name: {}", other))),
        }
    }
}

/// Fatal input errors. Any of these aborts the run before checks execute;
/// per-check problems never surface here.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("failed to read brief {path}: {source}")]
    BriefRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("brief {path} is not valid JSON: {source}")]
    BriefParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to read plan document {path}: {source}")]
    PlanRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config {path} is not valid TOML: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("config {path} is invalid: {message}")]
    ConfigInvalid { path: PathBuf, message: String },
    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Options for a single validation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the JSON campaign brief
    pub brief_path: PathBuf,
    /// Path to the plan document (plain text / markdown conventions)
    pub plan_path: PathBuf,
    /// Run the advisory AI strategy review
    pub ai_validation: bool,
    /// Engine configuration
    pub config: ValidationConfig,
}

/// Load the brief from disk. Read and JSON errors are fatal.
pub fn load_brief(path: &Path) -> Result<Brief, PreflightError> {
    let raw = std::fs::read_to_string(path).map_err(|source| PreflightError::BriefRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PreflightError::BriefParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse the plan document from disk. Only the read can fail;
/// parsing never does, convention violations surface later as per-check
/// ERROR results.
pub fn load_plan(path: &Path, config: &ValidationConfig) -> Result<PlanDocument, PreflightError> {
    let raw = std::fs::read_to_string(path).map_err(|source| PreflightError::PlanRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PlanDocument::parse(&raw, config))
}

/// Run a complete validation of a brief/plan pair.
///
/// This is the main entry point. It loads both inputs (fatal on failure),
/// then hands off to the engine, which never fails: every downstream
/// problem is recorded inside the returned report.
pub fn run_validation(opts: &RunOptions) -> Result<ValidationReport, PreflightError> {
    let brief = load_brief(&opts.brief_path)?;
    let document = load_plan(&opts.plan_path, &opts.config)?;

    let run = ValidationRun {
        test_case: opts
            .plan_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string()),
        brief_file: opts
            .brief_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        plan_file: opts
            .plan_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let reviewer = if opts.ai_validation {
        Some(ai::reviewer_from_env(&opts.config))
    } else {
        None
    };

    Ok(engine::orchestrator::run(
        &run,
        &brief,
        &document,
        &opts.config,
        reviewer.as_deref(),
    ))
}
