//! Domain models for number generation.
//!
//! This module contains the number plan derived from configuration and the
//! validation report produced for a generated dataset.

pub mod plan;
pub mod report;

pub use plan::{MAX_SUFFIX_LENGTH, NumberPlan};
pub use report::ValidationReport;
