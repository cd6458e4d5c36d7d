//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (`config/default.toml`, or an explicit file given on the command line)
//! - Environment variables with `MOBILEGEN__<SECTION>__<KEY>` pattern
//! - Command-line overrides

mod export;
mod generator;

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use export::ExportConfig;
pub use generator::GeneratorConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Number generation configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Spreadsheet export configuration.
    #[serde(default)]
    pub export: ExportConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Values supplied on the command line. Each `Some` wins over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit configuration file (must exist when given).
    pub config_file: Option<PathBuf>,
    /// Number prefix.
    pub prefix: Option<String>,
    /// Total digits per number.
    pub total_length: Option<u32>,
    /// Requested count.
    pub count: Option<u64>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Output workbook path.
    pub output: Option<PathBuf>,
    /// Disable the workbook export.
    pub no_export: bool,
}

impl AppConfig {
    /// Load configuration from files, environment and command-line overrides.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. The explicit configuration file, if any
    /// 3. Environment variables with `MOBILEGEN__` prefix (a `.env` file is honored)
    /// 4. Command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let mut builder =
            Config::builder().add_source(File::with_name("config/default").required(false));

        if let Some(path) = &overrides.config_file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        // MOBILEGEN__GENERATOR__SEED=7 -> generator.seed = 7
        // No try_parsing: a prefix like "019" must stay a string.
        builder = builder.add_source(Environment::with_prefix("MOBILEGEN").separator("__"));

        let output = overrides
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let mut builder = builder
            .set_override_option("generator.prefix", overrides.prefix.clone())?
            .set_override_option("generator.total_length", overrides.total_length.map(u64::from))?
            .set_override_option("generator.count", overrides.count)?
            .set_override_option("generator.seed", overrides.seed)?
            .set_override_option("export.output", output)?;

        if overrides.no_export {
            builder = builder.set_override("export.enabled", false)?;
        }

        let app_config: Self = builder.build()?.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.export.validate()?;

        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::Message(
                "observability.log_level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Text,
        }
    }
}
