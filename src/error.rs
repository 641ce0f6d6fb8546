//! Error types for catalog loading and the command-line surface
//!
//! The search core itself never fails: an unmatched query is an empty
//! result list. Errors only come from reading catalog and synonym files
//! or from malformed command-line input.

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error, Serialize)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Parse(_) => "parse_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::Parse(_) => 1,
            AppError::NotFound(_) => 3,
            AppError::Io(_) => 5,
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(err.to_string())
        } else {
            AppError::Io(err.to_string())
        }
    }
}

/// Reject limits that would always produce an empty listing
pub fn validate_limit(limit: Option<usize>) -> Result<(), AppError> {
    match limit {
        Some(0) => Err(AppError::InvalidInput(
            "Limit must be at least 1".to_string(),
        )),
        _ => Ok(()),
    }
}
