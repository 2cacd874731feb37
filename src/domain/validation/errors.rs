//! Rejections produced by the input validators.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors that occur while turning raw user input into domain values.
///
/// Every variant is a user-input error: it is reported verbatim and the
/// caller is expected to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Headcount must be one of 2, 3, 5 or 10, got {value}")]
    InvalidHeadcount { value: i64 },

    #[error("Invalid mention format: {token}")]
    InvalidMentionFormat { token: String },

    #[error("The specified user does not exist or is a bot: {token}")]
    UnknownOrIneligibleMember { token: String },

    #[error("Invalid time {hour}:{minute}: hour must be 0-23 and minute 0-59")]
    InvalidTimeRange { hour: u32, minute: u32 },

    #[error("Invalid date {year}/{month}/{day}: no such calendar day")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("Invalid date format '{input}'. Accepted formats are 'HH:MM', 'MM/DD HH:MM', 'YYYY/MM/DD HH:MM', 'NN' (minutes from now)")]
    UnmatchedDateFormat { input: String },

    #[error("Minutes from now must be a positive integer, got {minutes}")]
    NonPositiveOffset { minutes: u32 },

    #[error("Minutes from now is out of range: {input}")]
    OffsetOutOfRange { input: String },
}

impl ValidationError {
    pub fn invalid_headcount(value: i64) -> Self {
        ValidationError::InvalidHeadcount { value }
    }

    pub fn invalid_mention_format(token: impl Into<String>) -> Self {
        ValidationError::InvalidMentionFormat {
            token: token.into(),
        }
    }

    pub fn unknown_or_ineligible_member(token: impl Into<String>) -> Self {
        ValidationError::UnknownOrIneligibleMember {
            token: token.into(),
        }
    }

    pub fn invalid_time_range(hour: u32, minute: u32) -> Self {
        ValidationError::InvalidTimeRange { hour, minute }
    }

    pub fn invalid_calendar_date(year: i32, month: u32, day: u32) -> Self {
        ValidationError::InvalidCalendarDate { year, month, day }
    }

    pub fn unmatched_date_format(input: impl Into<String>) -> Self {
        ValidationError::UnmatchedDateFormat {
            input: input.into(),
        }
    }

    /// Returns the error code for this rejection.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidHeadcount { .. } => ErrorCode::InvalidHeadcount,
            ValidationError::InvalidMentionFormat { .. } => ErrorCode::InvalidMentionFormat,
            ValidationError::UnknownOrIneligibleMember { .. } => {
                ErrorCode::UnknownOrIneligibleMember
            }
            ValidationError::InvalidTimeRange { .. } => ErrorCode::InvalidTimeRange,
            ValidationError::InvalidCalendarDate { .. } => ErrorCode::InvalidCalendarDate,
            ValidationError::UnmatchedDateFormat { .. } => ErrorCode::UnmatchedDateFormat,
            ValidationError::NonPositiveOffset { .. } => ErrorCode::NonPositiveOffset,
            ValidationError::OffsetOutOfRange { .. } => ErrorCode::OffsetOutOfRange,
        }
    }
}
