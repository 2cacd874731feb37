//! RecruitmentContext - Wires adapters, validators and handlers together.
//!
//! One context per process. The store and directory live here and are
//! shared with everything that needs them by `Arc`; nothing is global.

use std::sync::Arc;

use super::handlers::{
    CloseRecruitmentHandler, GetRecruitmentHandler, RespondToRecruitmentHandler,
    StartRecruitmentHandler,
};
use crate::adapters::{
    AngleBracketMentionParser, InMemoryMemberDirectory, InMemoryRecruitmentStore,
    MembershipListener, SystemClock, UuidRecruitmentIdGenerator,
};
use crate::config::{AppConfig, ValidationError};
use crate::domain::validation::{ParticipantsValidator, ScheduleParser};
use crate::ports::{Clock, MentionParser, RecruitmentIdGenerator};

/// Composition root for the recruitment feature.
pub struct RecruitmentContext {
    store: Arc<InMemoryRecruitmentStore>,
    directory: Arc<InMemoryMemberDirectory>,
    pub start: StartRecruitmentHandler,
    pub respond: RespondToRecruitmentHandler,
    pub get: GetRecruitmentHandler,
    pub close: CloseRecruitmentHandler,
}

impl RecruitmentContext {
    /// Build a context with the production adapters.
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        Self::new(
            config,
            Arc::new(SystemClock),
            Arc::new(UuidRecruitmentIdGenerator),
            Arc::new(AngleBracketMentionParser),
        )
    }

    /// Build a context with caller-supplied clock, id generator and mention
    /// syntax.
    pub fn new(
        config: &AppConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn RecruitmentIdGenerator>,
        mentions: Arc<dyn MentionParser>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;

        let store = Arc::new(InMemoryRecruitmentStore::new());
        let directory = Arc::new(InMemoryMemberDirectory::new());

        let schedule = ScheduleParser::new(clock, config.schedule.offset()?)
            .with_default_lead(config.schedule.default_lead());
        let participants = ParticipantsValidator::new(directory.clone(), mentions);

        Ok(Self {
            start: StartRecruitmentHandler::new(store.clone(), ids, participants, schedule),
            respond: RespondToRecruitmentHandler::new(store.clone()),
            get: GetRecruitmentHandler::new(store.clone()),
            close: CloseRecruitmentHandler::new(store.clone()),
            store,
            directory,
        })
    }

    /// Listener that keeps the member directory in sync. Spawn its `run`
    /// on the runtime and feed it the platform's membership notifications.
    pub fn membership_listener(&self) -> MembershipListener {
        MembershipListener::new(self.directory.clone())
    }

    /// Shared recruitment store.
    pub fn store(&self) -> &Arc<InMemoryRecruitmentStore> {
        &self.store
    }

    /// Shared member directory.
    pub fn directory(&self) -> &Arc<InMemoryMemberDirectory> {
        &self.directory
    }
}

impl std::fmt::Debug for RecruitmentContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecruitmentContext")
            .field("recruitments", &self.store.len())
            .field("guilds", &self.directory.guild_count())
            .finish_non_exhaustive()
    }
}
