//! # mobilegen
//!
//! Generates a bounded set of unique synthetic mobile numbers sharing a fixed
//! prefix and total length, validates them, and exports them to a spreadsheet:
//!
//! - **Sampling**: distinct suffixes drawn without replacement from a seeded generator
//! - **Validation**: cardinality, prefix, length and digit checks with itemized issues
//! - **Export**: one `Mobile_Number` text column in an `.xlsx` workbook
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │   Config   │ → │  Sampler   │ → │ Validator  │ → │  Report +  │
//! │ (layered)  │   │ (seeded)   │   │            │   │  Exporter  │
//! └────────────┘   └────────────┘   └────────────┘   └────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod service;

use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{error, info};

use crate::cli::Cli;
use crate::config::{AppConfig, LogFormat};
use crate::domain::NumberPlan;
use crate::error::{AppError, Result};
use crate::export::XlsxExporter;
use crate::service::{GenerationReport, UniqueSuffixSampler, validate};

/// Run one generation.
///
/// This function:
/// 1. Loads configuration from files, environment and the command line
/// 2. Samples the requested count of unique numbers
/// 3. Validates the dataset and prints the report to stdout
/// 4. Writes the workbook
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or is invalid
/// - The requested count exceeds the number domain
/// - The dataset fails validation (nothing is exported)
/// - The workbook cannot be written
pub fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(&cli.overrides())?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting mobilegen"
    );

    let plan = config.generator.plan()?;
    info!(
        pattern = %plan,
        max_combinations = plan.max_combinations(),
        seed = config.generator.seed,
        "Generator initialized"
    );

    let sampler = UniqueSuffixSampler::new(plan, config.generator.seed);
    let started = Instant::now();
    let numbers = sampler.generate(config.generator.count)?;
    let elapsed = started.elapsed();
    info!(
        count = numbers.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "Generation completed"
    );

    publish(&config, sampler.plan(), &numbers, elapsed, cli.json)
}

/// Validate, report and export a generated dataset.
///
/// A dataset failing validation is reported but never exported.
fn publish(
    config: &AppConfig,
    plan: &NumberPlan,
    numbers: &[String],
    elapsed: Duration,
    json: bool,
) -> Result<()> {
    let validation = validate(numbers, plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&validation)?);
    } else {
        let report = GenerationReport {
            plan,
            numbers,
            validation: &validation,
            elapsed,
            generated_at: Local::now(),
        };
        println!("{}", report.render());
    }

    if !validation.passed {
        for issue in &validation.issues {
            error!(%issue, "Validation issue");
        }
        return Err(AppError::ValidationFailed(validation.issues));
    }

    if config.export.enabled {
        let path = XlsxExporter::new(&config.export.output).export(numbers)?;
        info!(path = %path.display(), "Dataset generation completed");
    } else {
        info!("Export disabled, workbook not written");
    }

    Ok(())
}

/// Initialize logging based on configuration.
///
/// Logs go to stderr so stdout carries only the report.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed when embedded or under test.
    let _ = match config.observability.log_format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::ExportConfig;

    fn config_writing_to(output: std::path::PathBuf) -> AppConfig {
        AppConfig {
            export: ExportConfig {
                enabled: true,
                output,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_failed_validation_skips_export() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("rejected.xlsx");
        let config = config_writing_to(output.clone());
        let plan = NumberPlan::new("019", 11).unwrap();
        let numbers = vec!["01900000001".to_string(), "01900000001".to_string()];

        let err = publish(&config, &plan, &numbers, Duration::ZERO, true).unwrap_err();

        match err {
            AppError::ValidationFailed(issues) => {
                assert_eq!(issues, vec!["Found 1 duplicate(s)"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_valid_dataset_is_exported() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("accepted.xlsx");
        let config = config_writing_to(output.clone());
        let plan = NumberPlan::new("019", 11).unwrap();
        let numbers = vec!["01900000001".to_string(), "01900000002".to_string()];

        publish(&config, &plan, &numbers, Duration::from_millis(1), false).unwrap();
        assert!(output.exists());
    }
}
