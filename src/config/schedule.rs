//! Schedule parsing configuration

use chrono::{Duration, FixedOffset};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::validation::DEFAULT_LEAD_MINUTES;

/// Longest accepted default lead time (one day)
const MAX_LEAD_MINUTES: i64 = 24 * 60;

/// Schedule configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Canonical UTC offset every start time is expressed in, e.g. `+09:00`
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    /// Minutes from now used when no start time is given
    #[serde(default = "default_lead_minutes")]
    pub default_lead_minutes: i64,
}

impl ScheduleConfig {
    /// Parse the canonical offset
    pub fn offset(&self) -> Result<FixedOffset, ValidationError> {
        self.utc_offset
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidUtcOffset(self.utc_offset.clone()))
    }

    /// Default lead time as a duration
    pub fn default_lead(&self) -> Duration {
        Duration::minutes(self.default_lead_minutes)
    }

    /// Validate schedule configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.offset()?;
        if self.default_lead_minutes <= 0 || self.default_lead_minutes > MAX_LEAD_MINUTES {
            return Err(ValidationError::InvalidLeadTime);
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            default_lead_minutes: default_lead_minutes(),
        }
    }
}

fn default_utc_offset() -> String {
    "+09:00".to_string()
}

fn default_lead_minutes() -> i64 {
    DEFAULT_LEAD_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_config_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.offset().unwrap(), FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(config.default_lead(), Duration::minutes(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_offset_parsing() {
        let config = ScheduleConfig {
            utc_offset: "-05:30".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.offset().unwrap(),
            FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
        );
    }

    #[test]
    fn test_validation_invalid_offset() {
        for bad in ["Asia/Tokyo", "", "+25:00", "9"] {
            let config = ScheduleConfig {
                utc_offset: bad.to_string(),
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidUtcOffset(bad.to_string())),
                "offset {bad:?}"
            );
        }
    }

    #[test]
    fn test_validation_invalid_lead_time() {
        for minutes in [0, -1, MAX_LEAD_MINUTES + 1] {
            let config = ScheduleConfig {
                default_lead_minutes: minutes,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidLeadTime));
        }
    }

    #[test]
    fn test_schedule_config_deserialization() {
        let json = r#"{ "utc_offset": "+00:00", "default_lead_minutes": 15 }"#;
        let config: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.offset().unwrap(), FixedOffset::east_opt(0).unwrap());
        assert_eq!(config.default_lead_minutes, 15);
    }
}
