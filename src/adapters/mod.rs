//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `storage` - Recruitment store (in-memory)
//! - `directory` - Member directory and membership notification listener
//! - `mention` - Mention syntax parsers
//! - `time` - Clocks and id generators

pub mod directory;
pub mod mention;
pub mod storage;
pub mod time;

pub use directory::{InMemoryMemberDirectory, MembershipEvent, MembershipListener};
pub use mention::AngleBracketMentionParser;
pub use storage::InMemoryRecruitmentStore;
pub use time::{FixedClock, SystemClock, UuidRecruitmentIdGenerator};
