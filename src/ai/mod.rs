//! Advisory AI strategy review.
//!
//! The review is an external capability: something that accepts the brief
//! plus the extracted strategy text and returns a verdict. The engine only
//! depends on the `StrategyReviewer` trait, and an always-available
//! unavailable implementation stands in when no credential is configured,
//! so the deterministic core never needs the network.
//!
//! Every failure mode here (missing key, timeout, HTTP error, malformed
//! response, empty strategy text) degrades to a SKIPPED result on this one
//! check; nothing propagates out of the engine.

pub mod openai;
pub mod prompt;

use serde_json::json;
use thiserror::Error;

use crate::brief::Brief;
use crate::config::ValidationConfig;
use crate::{CheckName, CheckResult};

/// Environment variable gating availability of the review capability.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Reviewer verdict on brief/strategy alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Consistent,
    PartiallyConsistent,
    Inconsistent,
}

impl Verdict {
    /// Parse the leading verdict token of a reviewer response.
    pub fn from_response(text: &str) -> Option<Verdict> {
        let head = text.trim_start();
        // Order matters: the longer tokens contain "CONSISTENT"
        if head.starts_with("PARTIALLY_CONSISTENT") {
            Some(Verdict::PartiallyConsistent)
        } else if head.starts_with("INCONSISTENT") {
            Some(Verdict::Inconsistent)
        } else if head.starts_with("CONSISTENT") {
            Some(Verdict::Consistent)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Consistent => "CONSISTENT",
            Verdict::PartiallyConsistent => "PARTIALLY_CONSISTENT",
            Verdict::Inconsistent => "INCONSISTENT",
        }
    }
}

/// Successful review: a verdict plus the reviewer's rationale.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub verdict: Verdict,
    pub rationale: String,
}

/// Terminal failures of the review capability.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("{API_KEY_ENV} is not set; AI review unavailable")]
    MissingCredential,
    #[error("review request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("review API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected review response: {0}")]
    MalformedResponse(String),
}

/// The external review capability the engine consumes.
pub trait StrategyReviewer: Send + Sync {
    fn review(&self, brief: &Brief, strategy_text: &str) -> Result<ReviewOutcome, ReviewError>;
}

/// Stand-in used when no credential is configured. Always errs, which the
/// engine records as SKIPPED.
pub struct UnavailableReviewer;

impl StrategyReviewer for UnavailableReviewer {
    fn review(&self, _brief: &Brief, _strategy_text: &str) -> Result<ReviewOutcome, ReviewError> {
        Err(ReviewError::MissingCredential)
    }
}

/// Build a reviewer from the environment: a real client when the API key
/// is present, the unavailable stand-in otherwise.
pub fn reviewer_from_env(config: &ValidationConfig) -> Box<dyn StrategyReviewer> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => {
            Box::new(openai::OpenAiReviewer::new(key, &config.review))
        }
        _ => Box::new(UnavailableReviewer),
    }
}

/// Run the advisory check. Advisory: the result is recorded in the report
/// but never consulted for overall status.
pub fn run_check(
    reviewer: &dyn StrategyReviewer,
    brief: &Brief,
    strategy_text: &str,
) -> CheckResult {
    if strategy_text.trim().is_empty() {
        return CheckResult::skipped(
            CheckName::AiStrategyReview,
            "no strategy text extracted from the document",
        );
    }

    match reviewer.review(brief, strategy_text) {
        Ok(outcome) => {
            let details = json!({
                "verdict": outcome.verdict.as_str(),
                "rationale": outcome.rationale,
                "advisory": true,
            });
            match outcome.verdict {
                Verdict::Consistent => CheckResult::pass(
                    CheckName::AiStrategyReview,
                    "reviewer judged the strategy consistent with the brief",
                    details,
                ),
                Verdict::PartiallyConsistent => CheckResult::fail(
                    CheckName::AiStrategyReview,
                    "reviewer judged the strategy only partially consistent with the brief",
                    details,
                ),
                Verdict::Inconsistent => CheckResult::fail(
                    CheckName::AiStrategyReview,
                    "reviewer judged the strategy inconsistent with the brief",
                    details,
                ),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "AI strategy review skipped");
            CheckResult::skipped(CheckName::AiStrategyReview, err.to_string())
        }
    }
}
