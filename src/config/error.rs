//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid UTC offset '{0}', expected a value like +09:00")]
    InvalidUtcOffset(String),

    #[error("Default lead time must be between 1 and 1440 minutes")]
    InvalidLeadTime,

    #[error("Invalid log filter directive '{0}'")]
    InvalidLogFilter(String),
}
