//! Read-only view of a recruitment handed to the rendering layer.

use serde::{Deserialize, Serialize};

use super::Headcount;
use crate::domain::foundation::{RecruitmentId, ScheduledAt, UserId};

/// Point-in-time copy of a recruitment.
///
/// Participant lists are sorted by id so that two snapshots of the same
/// state are equal and render identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitmentSnapshot {
    /// Recruitment ID.
    pub id: RecruitmentId,

    /// User who started the recruitment.
    pub organizer: UserId,

    /// Target number of participants.
    pub headcount: Headcount,

    /// Users who joined.
    pub participants: Vec<UserId>,

    /// Users who declined.
    pub non_participants: Vec<UserId>,

    /// `max(0, headcount - participants)`.
    pub remaining_slots: u32,

    /// When the activity is expected to start.
    pub scheduled_at: ScheduledAt,
}

impl RecruitmentSnapshot {
    /// Returns true once the headcount has been reached.
    pub fn is_full(&self) -> bool {
        self.remaining_slots == 0
    }

    /// Returns true if the user has joined.
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.participants.binary_search(&user_id).is_ok()
    }

    /// Returns true if the user has declined.
    pub fn is_non_participant(&self, user_id: UserId) -> bool {
        self.non_participants.binary_search(&user_id).is_ok()
    }
}
