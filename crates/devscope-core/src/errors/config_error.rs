//! Configuration errors.

use super::error_code::{self, DevscopeErrorCode};

/// Errors raised while loading or validating [`crate::DevscopeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl DevscopeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_ERROR,
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
        }
    }
}
