//! In-memory member directory.
//!
//! Holds one roster per guild. Populated on startup with `load` and kept
//! current by the [`MembershipListener`](super::MembershipListener).

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::directory::MemberRecord;
use crate::domain::foundation::{GuildId, UserId};
use crate::ports::{MemberDirectory, MemberDirectoryWriter};

type Rosters = HashMap<GuildId, HashMap<UserId, MemberRecord>>;

/// In-memory directory of guild members.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberDirectory {
    rosters: Arc<RwLock<Rosters>>,
}

impl InMemoryMemberDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members known for a guild
    pub fn member_count(&self, guild_id: GuildId) -> usize {
        self.read().get(&guild_id).map_or(0, HashMap::len)
    }

    /// Number of guilds with a roster
    pub fn guild_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Rosters> {
        self.rosters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Rosters> {
        self.rosters.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemberDirectory for InMemoryMemberDirectory {
    fn lookup(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRecord> {
        self.read().get(&guild_id)?.get(&user_id).cloned()
    }
}

impl MemberDirectoryWriter for InMemoryMemberDirectory {
    fn load(&self, guild_id: GuildId, members: Vec<MemberRecord>) {
        let roster = members.into_iter().map(|m| (m.id, m)).collect();
        self.write().insert(guild_id, roster);
    }

    fn upsert(&self, guild_id: GuildId, member: MemberRecord) {
        self.write()
            .entry(guild_id)
            .or_default()
            .insert(member.id, member);
    }

    fn remove(&self, guild_id: GuildId, user_id: UserId) {
        if let Some(roster) = self.write().get_mut(&guild_id) {
            roster.remove(&user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUILD: GuildId = GuildId::new(10);

    fn alice() -> MemberRecord {
        MemberRecord::human(UserId::new(1), "alice")
    }

    #[test]
    fn lookup_unknown_guild_is_none() {
        let directory = InMemoryMemberDirectory::new();
        assert!(directory.lookup(GUILD, UserId::new(1)).is_none());
    }

    #[test]
    fn load_replaces_roster() {
        let directory = InMemoryMemberDirectory::new();
        directory.load(GUILD, vec![alice(), MemberRecord::bot(UserId::new(2), "bot")]);
        assert_eq!(directory.member_count(GUILD), 2);

        directory.load(GUILD, vec![MemberRecord::human(UserId::new(3), "carol")]);
        assert_eq!(directory.member_count(GUILD), 1);
        assert!(directory.lookup(GUILD, UserId::new(1)).is_none());
        assert!(directory.lookup(GUILD, UserId::new(3)).is_some());
    }

    #[test]
    fn upsert_creates_guild_and_updates_member() {
        let directory = InMemoryMemberDirectory::new();
        directory.upsert(GUILD, alice());
        directory.upsert(GUILD, MemberRecord::human(UserId::new(1), "alice2"));

        let member = directory.lookup(GUILD, UserId::new(1)).unwrap();
        assert_eq!(member.display_name, "alice2");
        assert_eq!(directory.member_count(GUILD), 1);
    }

    #[test]
    fn remove_is_noop_for_unknowns() {
        let directory = InMemoryMemberDirectory::new();
        directory.remove(GUILD, UserId::new(1));
        assert_eq!(directory.guild_count(), 0);

        directory.upsert(GUILD, alice());
        directory.remove(GUILD, UserId::new(1));
        assert!(directory.lookup(GUILD, UserId::new(1)).is_none());
    }

    #[test]
    fn guilds_are_isolated() {
        let directory = InMemoryMemberDirectory::new();
        directory.upsert(GUILD, alice());

        assert!(directory.lookup(GuildId::new(11), UserId::new(1)).is_none());
    }
}
