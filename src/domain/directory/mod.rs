//! Member directory domain types.
//!
//! The directory is a read model of guild membership. It is fed by
//! platform notifications and consulted when validating mentions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// What the directory knows about one guild member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Platform user id.
    pub id: UserId,

    /// Name shown in the guild.
    pub display_name: String,

    /// Whether the account is automated.
    pub is_bot: bool,
}

impl MemberRecord {
    /// Creates a record for a human member.
    pub fn human(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_bot: false,
        }
    }

    /// Creates a record for a bot account.
    pub fn bot(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_bot: true,
        }
    }

    /// Only human members may be invited to a recruitment.
    pub fn is_eligible(&self) -> bool {
        !self.is_bot
    }
}
