//! Recruitment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, RecruitmentId};

/// Errors surfaced by the recruitment store.
///
/// Mutations on an unknown recruitment are deliberately not errors; only
/// creation and reads report these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecruitmentError {
    /// A recruitment with this id is already stored.
    #[error("Recruitment already exists: {0}")]
    AlreadyExists(RecruitmentId),

    /// No recruitment with this id is stored.
    #[error("Recruitment not found: {0}")]
    NotFound(RecruitmentId),
}

impl RecruitmentError {
    pub fn already_exists(id: RecruitmentId) -> Self {
        RecruitmentError::AlreadyExists(id)
    }

    pub fn not_found(id: RecruitmentId) -> Self {
        RecruitmentError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RecruitmentError::AlreadyExists(_) => ErrorCode::RecruitmentAlreadyExists,
            RecruitmentError::NotFound(_) => ErrorCode::RecruitmentNotFound,
        }
    }
}
