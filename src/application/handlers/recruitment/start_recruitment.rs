//! StartRecruitmentHandler - Command handler for opening a new recruitment.

use std::sync::Arc;

use tracing::{info, warn};

use super::CommandError;
use crate::domain::foundation::{GuildId, UserId};
use crate::domain::recruitment::{Recruitment, RecruitmentSnapshot};
use crate::domain::validation::{validate_headcount, ParticipantsValidator, ScheduleParser};
use crate::ports::{RecruitmentIdGenerator, RecruitmentStore};

/// Raw slash-command input for starting a recruitment.
#[derive(Debug, Clone)]
pub struct StartRecruitmentCommand {
    /// Guild the command was issued in.
    pub guild_id: GuildId,
    /// User who issued the command. Becomes the organizer.
    pub inviter: UserId,
    /// Requested headcount, `None` for the default.
    pub headcount: Option<i64>,
    /// Space-separated mentions of users who are already in.
    pub participants: Option<String>,
    /// Start time expression, `None` for the default lead time.
    pub scheduled_at: Option<String>,
}

/// Handler for starting recruitments.
///
/// Every input is validated before anything is written; a rejected command
/// leaves the store untouched.
pub struct StartRecruitmentHandler {
    store: Arc<dyn RecruitmentStore>,
    ids: Arc<dyn RecruitmentIdGenerator>,
    participants: ParticipantsValidator,
    schedule: ScheduleParser,
}

impl StartRecruitmentHandler {
    pub fn new(
        store: Arc<dyn RecruitmentStore>,
        ids: Arc<dyn RecruitmentIdGenerator>,
        participants: ParticipantsValidator,
        schedule: ScheduleParser,
    ) -> Self {
        Self {
            store,
            ids,
            participants,
            schedule,
        }
    }

    pub fn handle(&self, cmd: StartRecruitmentCommand) -> Result<RecruitmentSnapshot, CommandError> {
        let recruitment = self.build(&cmd).map_err(|err| {
            warn!(
                guild_id = %cmd.guild_id,
                inviter = %cmd.inviter,
                code = %err.code(),
                "Start recruitment rejected: {}",
                err
            );
            err
        })?;

        let snapshot = self.store.create(recruitment)?;

        info!(
            recruitment_id = %snapshot.id,
            guild_id = %cmd.guild_id,
            organizer = %snapshot.organizer,
            headcount = snapshot.headcount.value(),
            scheduled_at = %snapshot.scheduled_at,
            "Recruitment started"
        );

        Ok(snapshot)
    }

    /// Validate in order: headcount, participants, start time.
    fn build(&self, cmd: &StartRecruitmentCommand) -> Result<Recruitment, CommandError> {
        let headcount = validate_headcount(cmd.headcount)?;
        let participants =
            self.participants
                .validate(cmd.guild_id, cmd.participants.as_deref(), cmd.inviter)?;
        let scheduled_at = self.schedule.parse(cmd.scheduled_at.as_deref())?;

        Ok(Recruitment::new(
            self.ids.next_id(),
            cmd.inviter,
            headcount,
            participants,
            scheduled_at,
        ))
    }
}
