//! Service layer module.
//!
//! Contains the sampling, validation and reporting logic.

pub mod report;
pub mod sampler;
pub mod validator;

pub use report::GenerationReport;
pub use sampler::{UniqueSuffixSampler, generate_numbers};
pub use validator::validate;
