//! Generator configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::NumberPlan;
use crate::error::AppError;

/// Number generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Leading digits shared by every generated number.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Total digits per number, prefix included.
    #[serde(default = "default_total_length")]
    pub total_length: u32,

    /// How many unique numbers to generate.
    #[serde(default = "default_count")]
    pub count: u64,

    /// Seed for the pseudo-random generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_prefix() -> String {
    "019".to_string()
}

const fn default_total_length() -> u32 {
    11
}

const fn default_count() -> u64 {
    3000
}

const fn default_seed() -> u64 {
    42
}

impl GeneratorConfig {
    /// Build the number plan described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix or total length is invalid.
    pub fn plan(&self) -> crate::error::Result<NumberPlan> {
        NumberPlan::new(&self.prefix, self.total_length)
    }

    /// Validate the generator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not numeric or does not leave room for a suffix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.plan() {
            Ok(_) => Ok(()),
            Err(AppError::InvalidConfig(reason)) => {
                Err(ConfigError::Message(format!("generator: {reason}")))
            }
            Err(other) => Err(ConfigError::Message(other.to_string())),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            total_length: default_total_length(),
            count: default_count(),
            seed: default_seed(),
        }
    }
}
