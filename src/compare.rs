//! Tolerance comparison primitives shared by all checks.
//!
//! Pure functions, no I/O. Both tolerance boundaries are inclusive: a
//! value exactly at the tolerance passes.

use std::collections::BTreeSet;

/// Relative tolerance: `|actual - expected| <= expected * tolerance`.
///
/// `tolerance` is a fraction of `expected`. With a zero expected value,
/// only an exactly matching actual passes.
pub fn within_relative_tolerance(actual: f64, expected: f64, tolerance: f64) -> bool {
    if expected == 0.0 {
        return actual == 0.0;
    }
    (actual - expected).abs() <= expected.abs() * tolerance
}

/// Absolute day tolerance: `|actual - expected| <= tolerance_days`.
pub fn within_day_tolerance(actual_days: i64, expected_days: i64, tolerance_days: i64) -> bool {
    (actual_days - expected_days).abs() <= tolerance_days
}

/// Symmetric difference between two sets, oriented for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDiff {
    /// Present in `a`, absent from `b`
    pub missing_from_b: Vec<String>,
    /// Present in `b`, absent from `a`
    pub extra_in_b: Vec<String>,
}

impl SetDiff {
    pub fn is_equal(&self) -> bool {
        self.missing_from_b.is_empty() && self.extra_in_b.is_empty()
    }
}

/// Compare two sets and report the symmetric difference in sorted order.
pub fn set_diff(a: &BTreeSet<String>, b: &BTreeSet<String>) -> SetDiff {
    SetDiff {
        missing_from_b: a.difference(b).cloned().collect(),
        extra_in_b: b.difference(a).cloned().collect(),
    }
}
