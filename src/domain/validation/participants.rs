//! Participant mention validation.

use std::sync::Arc;

use super::ValidationError;
use crate::domain::foundation::{GuildId, UserId};
use crate::ports::{MemberDirectory, MentionParser};

/// Validates the space-separated mentions supplied when a recruitment is
/// started.
///
/// # Policy
///
/// - The inviter is always the first entry of the result.
/// - A token that is not a mention is rejected as `InvalidMentionFormat`.
/// - A mention of someone who is not in the guild directory, or who is a
///   bot, is rejected as `UnknownOrIneligibleMember`. Both cases share one
///   error so callers cannot probe membership.
/// - Mentioning the inviter or the same user twice is not an error; the
///   entry simply collapses.
/// - Validation stops at the first offending token.
#[derive(Clone)]
pub struct ParticipantsValidator {
    directory: Arc<dyn MemberDirectory>,
    parser: Arc<dyn MentionParser>,
}

impl ParticipantsValidator {
    pub fn new(directory: Arc<dyn MemberDirectory>, parser: Arc<dyn MentionParser>) -> Self {
        Self { directory, parser }
    }

    /// Validate raw mentions against the directory of `guild_id`.
    ///
    /// Returns the deduplicated members, inviter first, then others in the
    /// order they were first mentioned.
    pub fn validate(
        &self,
        guild_id: GuildId,
        raw: Option<&str>,
        inviter: UserId,
    ) -> Result<Vec<UserId>, ValidationError> {
        let mut members = vec![inviter];

        for token in raw.unwrap_or_default().split_whitespace() {
            let user_id = self
                .parser
                .parse(token)
                .ok_or_else(|| ValidationError::invalid_mention_format(token))?;

            if members.contains(&user_id) {
                continue;
            }

            match self.directory.lookup(guild_id, user_id) {
                Some(member) if member.is_eligible() => members.push(user_id),
                _ => return Err(ValidationError::unknown_or_ineligible_member(token)),
            }
        }

        Ok(members)
    }
}

impl std::fmt::Debug for ParticipantsValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticipantsValidator").finish_non_exhaustive()
    }
}
