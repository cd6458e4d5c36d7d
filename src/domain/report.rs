//! Validation report.

use serde::Serialize;

/// Outcome of checking a generated dataset against its plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Numbers in the dataset.
    pub total_count: usize,
    /// Distinct numbers in the dataset.
    pub unique_count: usize,
    /// `total_count - unique_count`.
    pub duplicates_found: usize,
    /// Numbers starting with the plan prefix.
    pub correct_prefix: usize,
    /// Numbers with the plan length.
    pub correct_length: usize,
    /// Numbers made only of ASCII digits.
    pub all_numeric: usize,
    /// True when `issues` is empty.
    pub passed: bool,
    /// One message per failed check.
    pub issues: Vec<String>,
}
