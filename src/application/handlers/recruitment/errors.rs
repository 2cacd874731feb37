//! Errors returned by recruitment command and query handlers.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::recruitment::RecruitmentError;
use crate::domain::validation::ValidationError;

/// Error type shared by the recruitment handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// User input failed validation. Nothing was stored.
    #[error("Rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// The store refused the operation.
    #[error(transparent)]
    Recruitment(#[from] RecruitmentError),
}

impl CommandError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CommandError::Rejected(err) => err.code(),
            CommandError::Recruitment(err) => err.code(),
        }
    }

    /// Returns true when the caller should report the problem back to the
    /// user who typed the command.
    pub fn is_user_input(&self) -> bool {
        self.code().is_user_input()
    }
}
