//! Unique suffix sampler.
//!
//! Draws distinct suffix indices from `[0, 10^suffix_length)` without
//! replacement and renders them as fixed-width numbers behind the plan prefix.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::domain::NumberPlan;
use crate::error::{AppError, Result};

/// Seeded sampler producing unique numbers for a plan.
#[derive(Debug, Clone)]
pub struct UniqueSuffixSampler {
    /// Shape of the generated numbers.
    plan: NumberPlan,
    /// Seed for the pseudo-random generator.
    seed: u64,
}

impl UniqueSuffixSampler {
    /// Create a new sampler.
    #[must_use]
    pub const fn new(plan: NumberPlan, seed: u64) -> Self {
        Self { plan, seed }
    }

    /// The plan this sampler draws from.
    #[must_use]
    pub const fn plan(&self) -> &NumberPlan {
        &self.plan
    }

    /// Generate `count` unique numbers, sorted ascending.
    ///
    /// The same seed, plan and count always yield the same numbers.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `count` exceeds the plan's domain, and
    /// `InvalidConfig` if the domain does not fit the platform index type.
    pub fn generate(&self, count: u64) -> Result<Vec<String>> {
        let max = self.plan.max_combinations();
        if count > max {
            return Err(AppError::OutOfRange {
                requested: count,
                max,
            });
        }

        let length = usize::try_from(max).map_err(|_| {
            AppError::InvalidConfig(format!("domain of {max} numbers is too large to sample"))
        })?;
        let amount = usize::try_from(count).map_err(|_| AppError::OutOfRange {
            requested: count,
            max,
        })?;

        info!(count, pattern = %self.plan, "Generating unique numbers");

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut suffixes = index::sample(&mut rng, length, amount).into_vec();

        // Equal-width padding keeps numeric order identical to string order.
        suffixes.sort_unstable();

        let numbers: Vec<String> = suffixes
            .into_iter()
            .map(|suffix| self.plan.format(suffix as u64))
            .collect();

        debug!(generated = numbers.len(), seed = self.seed, "Sampling complete");
        Ok(numbers)
    }
}

/// Generate the numbers described by a generator configuration.
///
/// # Errors
///
/// Returns `InvalidConfig` for a malformed plan and `OutOfRange` when the
/// requested count exceeds the domain.
pub fn generate_numbers(config: &GeneratorConfig) -> Result<Vec<String>> {
    UniqueSuffixSampler::new(config.plan()?, config.seed).generate(config.count)
}
