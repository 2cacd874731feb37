//! Recruitment aggregate entity.
//!
//! A recruitment is one group sign-up: a target headcount, the users who
//! joined, the users who declined and a scheduled start time.
//!
//! # Ownership
//!
//! Recruitments are owned exclusively by the
//! [`RecruitmentStore`](crate::ports::RecruitmentStore). Everything outside
//! the store only ever sees a [`RecruitmentSnapshot`].

use std::collections::BTreeSet;

use super::{Headcount, RecruitmentSnapshot};
use crate::domain::foundation::{RecruitmentId, ScheduledAt, UserId};

/// Recruitment aggregate.
///
/// # Invariants
///
/// - `participants` and `non_participants` are disjoint
/// - `organizer` is a participant right after construction
/// - `headcount` is one of the accepted values (enforced by [`Headcount`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recruitment {
    /// Unique identifier for this recruitment.
    id: RecruitmentId,

    /// User who started the recruitment.
    organizer: UserId,

    /// Target number of participants.
    headcount: Headcount,

    /// Users who joined.
    participants: BTreeSet<UserId>,

    /// Users who declined.
    non_participants: BTreeSet<UserId>,

    /// Expected start.
    scheduled_at: ScheduledAt,
}

impl Recruitment {
    /// Create a new recruitment.
    ///
    /// The organizer is always added to `participants`, whether or not the
    /// supplied list already contains it. Duplicates collapse.
    pub fn new(
        id: RecruitmentId,
        organizer: UserId,
        headcount: Headcount,
        participants: impl IntoIterator<Item = UserId>,
        scheduled_at: ScheduledAt,
    ) -> Self {
        let mut participants: BTreeSet<UserId> = participants.into_iter().collect();
        participants.insert(organizer);

        Self {
            id,
            organizer,
            headcount,
            participants,
            non_participants: BTreeSet::new(),
            scheduled_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the recruitment ID.
    pub fn id(&self) -> &RecruitmentId {
        &self.id
    }

    /// Returns the organizer's user ID.
    pub fn organizer(&self) -> UserId {
        self.organizer
    }

    /// Returns the target headcount.
    pub fn headcount(&self) -> Headcount {
        self.headcount
    }

    /// Returns the users who joined.
    pub fn participants(&self) -> &BTreeSet<UserId> {
        &self.participants
    }

    /// Returns the users who declined.
    pub fn non_participants(&self) -> &BTreeSet<UserId> {
        &self.non_participants
    }

    /// Returns the scheduled start.
    pub fn scheduled_at(&self) -> &ScheduledAt {
        &self.scheduled_at
    }

    /// Returns `max(0, headcount - participants)`.
    pub fn remaining_slots(&self) -> u32 {
        let headcount = usize::from(self.headcount.value());
        // Bounded by headcount, so the cast cannot truncate.
        headcount.saturating_sub(self.participants.len()) as u32
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a user's answer.
    ///
    /// `participating = true` moves the user into `participants`, `false`
    /// into `non_participants`. Repeating the same answer is a no-op.
    pub fn set_participation(&mut self, user_id: UserId, participating: bool) {
        if participating {
            self.non_participants.remove(&user_id);
            self.participants.insert(user_id);
        } else {
            self.participants.remove(&user_id);
            self.non_participants.insert(user_id);
        }
    }

    /// Withdraw a user's answer entirely.
    pub fn cancel_participation(&mut self, user_id: UserId) {
        self.participants.remove(&user_id);
        self.non_participants.remove(&user_id);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────

    /// Take a read-only snapshot.
    pub fn snapshot(&self) -> RecruitmentSnapshot {
        RecruitmentSnapshot {
            id: self.id,
            organizer: self.organizer,
            headcount: self.headcount,
            participants: self.participants.iter().copied().collect(),
            non_participants: self.non_participants.iter().copied().collect(),
            remaining_slots: self.remaining_slots(),
            scheduled_at: self.scheduled_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use uuid::Uuid;

    fn test_recruitment(headcount: Headcount, participants: &[u64]) -> Recruitment {
        let at = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2030, 1, 15, 21, 0, 0)
            .unwrap();
        Recruitment::new(
            RecruitmentId::from_uuid(Uuid::new_v4()),
            UserId::new(1),
            headcount,
            participants.iter().copied().map(UserId::new),
            ScheduledAt::from_datetime(at),
        )
    }

    fn is_disjoint(r: &Recruitment) -> bool {
        r.participants().is_disjoint(r.non_participants())
    }

    #[test]
    fn new_includes_organizer() {
        let r = test_recruitment(Headcount::Five, &[]);
        assert!(r.participants().contains(&UserId::new(1)));
        assert!(r.non_participants().is_empty());
    }

    #[test]
    fn new_collapses_duplicates_and_organizer() {
        let r = test_recruitment(Headcount::Five, &[1, 2, 2, 3]);
        assert_eq!(r.participants().len(), 3);
    }

    #[test]
    fn join_removes_from_non_participants() {
        let mut r = test_recruitment(Headcount::Five, &[]);
        let user = UserId::new(9);

        r.set_participation(user, false);
        assert!(r.non_participants().contains(&user));

        r.set_participation(user, true);
        assert!(r.participants().contains(&user));
        assert!(!r.non_participants().contains(&user));
        assert!(is_disjoint(&r));
    }

    #[test]
    fn decline_removes_from_participants() {
        let mut r = test_recruitment(Headcount::Five, &[9]);
        let user = UserId::new(9);

        r.set_participation(user, false);
        assert!(!r.participants().contains(&user));
        assert!(r.non_participants().contains(&user));
        assert!(is_disjoint(&r));
    }

    #[test]
    fn repeated_join_is_idempotent() {
        let mut r = test_recruitment(Headcount::Five, &[]);
        let user = UserId::new(9);

        r.set_participation(user, true);
        r.set_participation(user, true);

        assert_eq!(r.participants().iter().filter(|u| **u == user).count(), 1);
        assert_eq!(r.participants().len(), 2);
    }

    #[test]
    fn cancel_clears_both_sets() {
        let mut r = test_recruitment(Headcount::Five, &[]);
        let joined = UserId::new(9);
        let declined = UserId::new(10);
        r.set_participation(joined, true);
        r.set_participation(declined, false);

        r.cancel_participation(joined);
        r.cancel_participation(declined);

        assert!(!r.participants().contains(&joined));
        assert!(r.non_participants().is_empty());
    }

    #[test]
    fn organizer_may_leave_after_creation() {
        let mut r = test_recruitment(Headcount::Two, &[]);
        r.set_participation(UserId::new(1), false);

        assert!(r.participants().is_empty());
        assert_eq!(r.organizer(), UserId::new(1));
    }

    #[test]
    fn remaining_slots_never_negative() {
        let r = test_recruitment(Headcount::Two, &[2, 3, 4]);
        assert_eq!(r.participants().len(), 4);
        assert_eq!(r.remaining_slots(), 0);

        let r = test_recruitment(Headcount::Ten, &[2]);
        assert_eq!(r.remaining_slots(), 8);
    }

    #[test]
    fn snapshot_is_sorted_copy() {
        let mut r = test_recruitment(Headcount::Three, &[30, 20]);
        r.set_participation(UserId::new(50), false);
        r.set_participation(UserId::new(40), false);

        let snap = r.snapshot();
        assert_eq!(
            snap.participants,
            vec![UserId::new(1), UserId::new(20), UserId::new(30)]
        );
        assert_eq!(snap.non_participants, vec![UserId::new(40), UserId::new(50)]);
        assert_eq!(snap.remaining_slots, 0);
        assert!(snap.is_full());
        assert!(snap.is_participant(UserId::new(20)));
        assert!(snap.is_non_participant(UserId::new(50)));
        assert_eq!(snap.headcount, Headcount::Three);
        assert_eq!(&snap.scheduled_at, r.scheduled_at());
    }
}
