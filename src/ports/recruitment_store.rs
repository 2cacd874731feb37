//! Recruitment store port.
//!
//! Defines the contract for keeping recruitments while users answer them.
//! Implementations own the aggregates; callers only ever receive
//! snapshots.
//!
//! # Design
//!
//! - **Atomic per call**: every method is one read-modify-write under a
//!   single critical section, and any snapshot it returns is taken inside
//!   that section
//! - **Stale references tolerated**: mutations against an unknown id are
//!   silent no-ops, because the message that carries the buttons can
//!   outlive the recruitment
//! - **Synchronous**: no method blocks on I/O

use crate::domain::foundation::{RecruitmentId, UserId};
use crate::domain::recruitment::{Recruitment, RecruitmentError, RecruitmentSnapshot};

/// Store port for Recruitment aggregates.
pub trait RecruitmentStore: Send + Sync {
    /// Store a new recruitment.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a recruitment with the same id is stored
    fn create(&self, recruitment: Recruitment) -> Result<RecruitmentSnapshot, RecruitmentError>;

    /// Get a snapshot of a recruitment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no recruitment has this id
    fn get(&self, id: &RecruitmentId) -> Result<RecruitmentSnapshot, RecruitmentError>;

    /// Move a user into `participants` (`true`) or `non_participants` (`false`).
    ///
    /// Returns the updated snapshot, or `None` if the id is unknown.
    fn set_participation(
        &self,
        id: &RecruitmentId,
        user_id: UserId,
        participating: bool,
    ) -> Option<RecruitmentSnapshot>;

    /// Remove a user from both sets.
    ///
    /// Returns the updated snapshot, or `None` if the id is unknown.
    fn cancel_participation(&self, id: &RecruitmentId, user_id: UserId)
        -> Option<RecruitmentSnapshot>;

    /// Remove a recruitment. Idempotent.
    ///
    /// Returns `true` if something was removed.
    fn delete(&self, id: &RecruitmentId) -> bool;
}
