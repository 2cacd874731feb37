//! RespondToRecruitmentHandler - Command handler for join / decline / cancel
//! button presses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::CommandError;
use crate::domain::foundation::{RecruitmentId, UserId};
use crate::domain::recruitment::{RecruitmentError, RecruitmentSnapshot};
use crate::ports::RecruitmentStore;

/// How a user answered a recruitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationResponse {
    /// Move into participants.
    Join,
    /// Move into non-participants.
    Decline,
    /// Withdraw any answer.
    Cancel,
}

/// A user's answer to a recruitment.
#[derive(Debug, Clone)]
pub struct RespondCommand {
    pub recruitment_id: RecruitmentId,
    pub user_id: UserId,
    pub response: ParticipationResponse,
}

/// Handler for participation changes.
///
/// Answers are not capped by the headcount and the organizer may leave
/// their own recruitment.
pub struct RespondToRecruitmentHandler {
    store: Arc<dyn RecruitmentStore>,
}

impl RespondToRecruitmentHandler {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    /// Apply the answer and return the state right after it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recruitment was already closed; the store is
    ///   left unchanged
    pub fn handle(&self, cmd: RespondCommand) -> Result<RecruitmentSnapshot, CommandError> {
        let updated = match cmd.response {
            ParticipationResponse::Join => {
                self.store
                    .set_participation(&cmd.recruitment_id, cmd.user_id, true)
            }
            ParticipationResponse::Decline => {
                self.store
                    .set_participation(&cmd.recruitment_id, cmd.user_id, false)
            }
            ParticipationResponse::Cancel => self
                .store
                .cancel_participation(&cmd.recruitment_id, cmd.user_id),
        };

        match updated {
            Some(snapshot) => {
                debug!(
                    recruitment_id = %cmd.recruitment_id,
                    user_id = %cmd.user_id,
                    response = ?cmd.response,
                    remaining_slots = snapshot.remaining_slots,
                    "Participation updated"
                );
                Ok(snapshot)
            }
            None => {
                warn!(
                    recruitment_id = %cmd.recruitment_id,
                    user_id = %cmd.user_id,
                    response = ?cmd.response,
                    "Response to unknown recruitment ignored"
                );
                Err(RecruitmentError::not_found(cmd.recruitment_id).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecruitmentStore;
    use crate::domain::foundation::ScheduledAt;
    use crate::domain::recruitment::{Headcount, Recruitment};
    use chrono::{FixedOffset, TimeZone};
    use uuid::Uuid;

    const ORGANIZER: UserId = UserId::new(1);
    const GUEST: UserId = UserId::new(2);

    fn seeded() -> (Arc<InMemoryRecruitmentStore>, RespondToRecruitmentHandler, RecruitmentId) {
        let store = Arc::new(InMemoryRecruitmentStore::new());
        let id = RecruitmentId::from_uuid(Uuid::from_u128(1));
        let at = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2030, 1, 15, 20, 0, 0)
            .unwrap();
        store
            .create(Recruitment::new(
                id,
                ORGANIZER,
                Headcount::Two,
                [ORGANIZER],
                ScheduledAt::from_datetime(at),
            ))
            .unwrap();

        let handler = RespondToRecruitmentHandler::new(store.clone());
        (store, handler, id)
    }

    fn respond(
        handler: &RespondToRecruitmentHandler,
        id: RecruitmentId,
        user_id: UserId,
        response: ParticipationResponse,
    ) -> Result<RecruitmentSnapshot, CommandError> {
        handler.handle(RespondCommand {
            recruitment_id: id,
            user_id,
            response,
        })
    }

    #[test]
    fn join_fills_slot() {
        let (_, handler, id) = seeded();

        let snapshot = respond(&handler, id, GUEST, ParticipationResponse::Join).unwrap();

        assert_eq!(snapshot.participants, vec![ORGANIZER, GUEST]);
        assert_eq!(snapshot.remaining_slots, 0);
    }

    #[test]
    fn decline_moves_out_of_participants() {
        let (_, handler, id) = seeded();
        respond(&handler, id, GUEST, ParticipationResponse::Join).unwrap();

        let snapshot = respond(&handler, id, GUEST, ParticipationResponse::Decline).unwrap();

        assert!(!snapshot.is_participant(GUEST));
        assert!(snapshot.is_non_participant(GUEST));
        assert_eq!(snapshot.remaining_slots, 1);
    }

    #[test]
    fn cancel_clears_both_lists() {
        let (_, handler, id) = seeded();
        respond(&handler, id, GUEST, ParticipationResponse::Decline).unwrap();

        let snapshot = respond(&handler, id, GUEST, ParticipationResponse::Cancel).unwrap();

        assert!(!snapshot.is_participant(GUEST));
        assert!(!snapshot.is_non_participant(GUEST));
    }

    #[test]
    fn organizer_can_decline_own_recruitment() {
        let (_, handler, id) = seeded();

        let snapshot = respond(&handler, id, ORGANIZER, ParticipationResponse::Decline).unwrap();

        assert!(snapshot.participants.is_empty());
        assert_eq!(snapshot.organizer, ORGANIZER);
        assert_eq!(snapshot.remaining_slots, 2);
    }

    #[test]
    fn joining_past_headcount_is_allowed() {
        let (_, handler, id) = seeded();
        respond(&handler, id, GUEST, ParticipationResponse::Join).unwrap();

        let snapshot =
            respond(&handler, id, UserId::new(3), ParticipationResponse::Join).unwrap();

        assert_eq!(snapshot.participants.len(), 3);
        assert_eq!(snapshot.remaining_slots, 0);
    }

    #[test]
    fn unknown_recruitment_reports_not_found() {
        let (store, handler, _) = seeded();
        let missing = RecruitmentId::from_uuid(Uuid::from_u128(99));

        for response in [
            ParticipationResponse::Join,
            ParticipationResponse::Decline,
            ParticipationResponse::Cancel,
        ] {
            let err = respond(&handler, missing, GUEST, response).unwrap_err();
            assert_eq!(
                err,
                CommandError::Recruitment(RecruitmentError::NotFound(missing))
            );
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn response_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ParticipationResponse::Decline).unwrap(),
            "\"decline\""
        );
    }
}
