//! Member directory adapters.
//!
//! - `InMemoryMemberDirectory` - Per-guild rosters held in memory
//! - `MembershipListener` - Applies membership notifications to a directory

mod in_memory_member_directory;
mod membership_listener;

pub use in_memory_member_directory::InMemoryMemberDirectory;
pub use membership_listener::{MembershipEvent, MembershipListener};
