//! Error code constants.
//!
//! Codes double as process exit statuses:
//! - 1: Internal errors
//! - 2-3: Input errors (configuration, requested count)
//! - 4-5: Output errors (validation, export)

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(u8);

impl ErrorCode {
    /// Unexpected internal failure.
    pub const INTERNAL_ERROR: Self = Self(1);

    /// Invalid configuration parameters.
    pub const INVALID_CONFIG: Self = Self(2);

    /// Requested count exceeds the number domain.
    pub const OUT_OF_RANGE: Self = Self(3);

    /// Generated dataset failed validation.
    pub const VALIDATION_FAILED: Self = Self(4);

    /// Output file could not be written.
    pub const EXPORT_FAILURE: Self = Self(5);

    /// Get the error code as a u8.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            2 | 3 => ErrorCategory::Input,
            4 | 5 => ErrorCategory::Output,
            _ => ErrorCategory::Internal,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for std::process::ExitCode {
    fn from(code: ErrorCode) -> Self {
        Self::from(code.0)
    }
}

/// Error category based on error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad configuration or request.
    Input,
    /// Failure producing the output artifacts.
    Output,
    /// Anything else.
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
            Self::Internal => write!(f, "internal"),
        }
    }
}
