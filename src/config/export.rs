//! Export configuration.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

/// Spreadsheet export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Whether to write the workbook at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Output workbook path.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

const fn default_enabled() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from("bangladesh_mobile_numbers.xlsx")
}

impl ExportConfig {
    /// Validate the export configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if export is enabled without an output path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.output.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "export.output cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: default_output(),
        }
    }
}
