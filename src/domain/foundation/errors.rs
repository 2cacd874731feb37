//! Error codes shared by every error type in the crate.

use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidHeadcount,
    InvalidMentionFormat,
    UnknownOrIneligibleMember,
    InvalidTimeRange,
    InvalidCalendarDate,
    UnmatchedDateFormat,
    NonPositiveOffset,
    OffsetOutOfRange,

    // Store errors
    RecruitmentAlreadyExists,
    RecruitmentNotFound,
}

impl ErrorCode {
    /// Returns true if the error was caused by user-supplied input.
    ///
    /// Such errors are reported back verbatim and never retried.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            ErrorCode::RecruitmentAlreadyExists | ErrorCode::RecruitmentNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidHeadcount => "INVALID_HEADCOUNT",
            ErrorCode::InvalidMentionFormat => "INVALID_MENTION_FORMAT",
            ErrorCode::UnknownOrIneligibleMember => "UNKNOWN_OR_INELIGIBLE_MEMBER",
            ErrorCode::InvalidTimeRange => "INVALID_TIME_RANGE",
            ErrorCode::InvalidCalendarDate => "INVALID_CALENDAR_DATE",
            ErrorCode::UnmatchedDateFormat => "UNMATCHED_DATE_FORMAT",
            ErrorCode::NonPositiveOffset => "NON_POSITIVE_OFFSET",
            ErrorCode::OffsetOutOfRange => "OFFSET_OUT_OF_RANGE",
            ErrorCode::RecruitmentAlreadyExists => "RECRUITMENT_ALREADY_EXISTS",
            ErrorCode::RecruitmentNotFound => "RECRUITMENT_NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}
