//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GROUP_RECRUIT` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so an empty environment yields a usable
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use group_recruit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Start times use offset {}", config.schedule.utc_offset);
//! ```

mod error;
mod schedule;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use schedule::ScheduleConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Start time parsing (canonical offset, default lead time)
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GROUP_RECRUIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GROUP_RECRUIT__SCHEDULE__UTC_OFFSET=+09:00` -> `schedule.utc_offset`
    /// - `GROUP_RECRUIT__TELEMETRY__JSON=true` -> `telemetry.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GROUP_RECRUIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.schedule.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
