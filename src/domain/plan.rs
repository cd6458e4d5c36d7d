//! Number plan.
//!
//! A plan fixes the shape of every generated number: a digit prefix followed
//! by a zero-padded suffix, `total_length` digits in all.

use serde::Serialize;

use crate::error::{AppError, Result};

/// Largest suffix width whose domain (`10^width`) still fits in a `u64`.
pub const MAX_SUFFIX_LENGTH: u32 = 19;

/// Validated prefix/length pair with its derived suffix width and domain size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberPlan {
    prefix: String,
    total_length: u32,
    suffix_length: u32,
    max_combinations: u64,
}

impl NumberPlan {
    /// Create a plan for numbers of `total_length` digits starting with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the prefix is empty or not all ASCII digits,
    /// if it leaves no room for a suffix, or if the suffix domain overflows `u64`.
    pub fn new(prefix: &str, total_length: u32) -> Result<Self> {
        if prefix.is_empty() {
            return Err(AppError::InvalidConfig("prefix cannot be empty".to_string()));
        }
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidConfig(format!(
                "prefix must be numeric, got: {prefix}"
            )));
        }

        let prefix_length = u32::try_from(prefix.len())
            .map_err(|_| AppError::InvalidConfig("prefix is too long".to_string()))?;
        if prefix_length >= total_length {
            return Err(AppError::InvalidConfig(format!(
                "prefix length {prefix_length} must be less than total length {total_length}"
            )));
        }

        let suffix_length = total_length - prefix_length;
        let max_combinations = 10_u64.checked_pow(suffix_length).ok_or_else(|| {
            AppError::InvalidConfig(format!(
                "suffix length {suffix_length} exceeds {MAX_SUFFIX_LENGTH} digits"
            ))
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            total_length,
            suffix_length,
            max_combinations,
        })
    }

    /// Leading digits.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Digits per number, prefix included.
    #[must_use]
    pub const fn total_length(&self) -> u32 {
        self.total_length
    }

    /// Digits after the prefix.
    #[must_use]
    pub const fn suffix_length(&self) -> u32 {
        self.suffix_length
    }

    /// Number of distinct numbers the plan can produce.
    #[must_use]
    pub const fn max_combinations(&self) -> u64 {
        self.max_combinations
    }

    /// Human-readable shape, e.g. `019XXXXXXXX`.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("{}{}", self.prefix, "X".repeat(self.suffix_length as usize))
    }

    /// Render a suffix index as a full number.
    ///
    /// `suffix` must be below [`max_combinations`](Self::max_combinations).
    #[must_use]
    pub fn format(&self, suffix: u64) -> String {
        debug_assert!(suffix < self.max_combinations);
        format!(
            "{}{:0width$}",
            self.prefix,
            suffix,
            width = self.suffix_length as usize
        )
    }
}

impl std::fmt::Display for NumberPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}
