//! Validation engine module.
//!
//! Provides check orchestration and report aggregation.

pub mod orchestrator;
pub mod report;
