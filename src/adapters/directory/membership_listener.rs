//! MembershipListener - Applies platform membership notifications to the
//! member directory.
//!
//! The platform gateway pushes notifications whenever a roster becomes
//! available or a member joins, changes or leaves. They arrive
//! asynchronously and are fire-and-forget: the sender never waits for the
//! directory to be updated, so the directory lags the platform by at most
//! the delivery latency of this channel.
//!
//! ## Graceful Shutdown
//!
//! The listener drains until either the sending side is dropped or the
//! shutdown signal flips to `true`.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::domain::directory::MemberRecord;
use crate::domain::foundation::{GuildId, UserId};
use crate::ports::MemberDirectoryWriter;

/// Membership notification from the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipEvent {
    /// Full roster of a guild (on connect or guild availability).
    RosterLoaded {
        guild_id: GuildId,
        members: Vec<MemberRecord>,
    },

    /// A member joined a guild.
    MemberJoined {
        guild_id: GuildId,
        member: MemberRecord,
    },

    /// A member's profile changed.
    MemberUpdated {
        guild_id: GuildId,
        member: MemberRecord,
    },

    /// A member left or was removed.
    MemberLeft { guild_id: GuildId, user_id: UserId },
}

/// Background consumer of membership notifications.
pub struct MembershipListener {
    directory: Arc<dyn MemberDirectoryWriter>,
}

impl MembershipListener {
    pub fn new(directory: Arc<dyn MemberDirectoryWriter>) -> Self {
        Self { directory }
    }

    /// Run until the channel closes or shutdown is requested.
    ///
    /// Returns the number of events applied.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<MembershipEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) -> usize {
        let mut applied = 0;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!(applied, "Membership listener shutting down");
                        return applied;
                    }
                }

                event = events.recv() => match event {
                    Some(event) => {
                        self.apply(event);
                        applied += 1;
                    }
                    None => {
                        info!(applied, "Membership channel closed");
                        return applied;
                    }
                },
            }
        }
    }

    /// Apply a single notification.
    pub fn apply(&self, event: MembershipEvent) {
        match event {
            MembershipEvent::RosterLoaded { guild_id, members } => {
                debug!(%guild_id, count = members.len(), "Loading guild roster");
                self.directory.load(guild_id, members);
            }
            MembershipEvent::MemberJoined { guild_id, member }
            | MembershipEvent::MemberUpdated { guild_id, member } => {
                debug!(%guild_id, user_id = %member.id, "Upserting member");
                self.directory.upsert(guild_id, member);
            }
            MembershipEvent::MemberLeft { guild_id, user_id } => {
                debug!(%guild_id, %user_id, "Removing member");
                self.directory.remove(guild_id, user_id);
            }
        }
    }
}
