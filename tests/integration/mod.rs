//! Integration tests for plan-preflight.
//!
//! These tests run complete validations over on-disk brief/plan pairs.

pub mod cli_tests;
pub mod full_run_tests;
pub mod output_tests;
