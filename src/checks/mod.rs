//! Validation check modules, one per mandatory check:
//! - budget: body-section amount sum vs brief budget
//! - duration: extracted date range vs brief duration
//! - channels: plan-table channels vs strategy-explainer channels
//! - creative: required asset types vs checklist coverage
//!
//! Every check is an independent pure function over the shared read-only
//! facts and normalized brief; a structural failure in one check's inputs
//! never prevents the others from running. Checks never panic and never
//! return errors: structural gaps become ERROR results, value mismatches
//! become FAIL results.

pub mod budget;
pub mod channels;
pub mod creative;
pub mod duration;

use crate::brief::NormalizedBrief;
use crate::config::ValidationConfig;
use crate::extract::FactSet;
use crate::{CheckName, CheckResult};

/// Dispatch a mandatory check by name. Used by the orchestrator's fan-out.
///
/// # Panics
///
/// Panics if called with the advisory review name; that check runs through
/// the `ai` module, not here.
pub fn run_mandatory(
    name: CheckName,
    facts: &FactSet,
    brief: &NormalizedBrief,
    config: &ValidationConfig,
) -> CheckResult {
    match name {
        CheckName::Budget => budget::run(facts, brief, config),
        CheckName::Duration => duration::run(facts, brief, config),
        CheckName::ChannelConsistency => channels::run(facts, config),
        CheckName::Creative => creative::run(facts, brief),
        CheckName::AiStrategyReview => {
            unreachable!("advisory review is not a mandatory check")
        }
    }
}
