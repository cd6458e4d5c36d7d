//! Error handling module.
//!
//! This module provides the unified error type for a generation run and its
//! mapping onto stable exit codes.

pub mod codes;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Requested more unique numbers than the domain holds.
    #[error("Cannot generate {requested} unique numbers, maximum possible is {max}")]
    OutOfRange {
        /// Requested count.
        requested: u64,
        /// Size of the number domain.
        max: u64,
    },

    /// Generated dataset did not pass validation.
    #[error("Dataset validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// Output file could not be written.
    #[error("Export failed: {0}")]
    ExportFailure(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig(_) => ErrorCode::INVALID_CONFIG,
            Self::OutOfRange { .. } => ErrorCode::OUT_OF_RANGE,
            Self::ValidationFailed(_) => ErrorCode::VALIDATION_FAILED,
            Self::ExportFailure(_) => ErrorCode::EXPORT_FAILURE,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Log this error and return its exit code.
    pub fn report(&self) -> ErrorCode {
        let code = self.error_code();

        tracing::error!(
            error_code = code.as_u8(),
            category = %code.category(),
            message = %self,
            "Run failed"
        );

        code
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::ExportFailure(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::ExportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
