//! Member directory ports.
//!
//! The directory is split the same way as other read models: a narrow
//! reader consulted by validators, and a writer driven by membership
//! notifications from the platform.
//!
//! The directory is eventually consistent with the platform. Readers must
//! accept that a member who joined moments ago may not be visible yet.

use crate::domain::directory::MemberRecord;
use crate::domain::foundation::{GuildId, UserId};

/// Reader port for guild membership lookups.
pub trait MemberDirectory: Send + Sync {
    /// Look up a member of a guild.
    ///
    /// Returns `None` if the guild or the member is unknown.
    fn lookup(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRecord>;
}

/// Writer port applying membership notifications.
pub trait MemberDirectoryWriter: Send + Sync {
    /// Replace a guild's roster wholesale.
    fn load(&self, guild_id: GuildId, members: Vec<MemberRecord>);

    /// Insert or update a single member.
    fn upsert(&self, guild_id: GuildId, member: MemberRecord);

    /// Remove a member. Unknown guild or member is a no-op.
    fn remove(&self, guild_id: GuildId, user_id: UserId);
}
