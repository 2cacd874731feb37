//! Recruitment id generator port.

use crate::domain::foundation::RecruitmentId;

/// Port for minting recruitment ids.
///
/// Ids must be unique for the lifetime of the process.
pub trait RecruitmentIdGenerator: Send + Sync {
    /// Returns a fresh id.
    fn next_id(&self) -> RecruitmentId;
}
