//! Mention parser port.
//!
//! Chat platforms escape user references differently. The participants
//! validator only needs "token in, user id out", so the concrete syntax
//! lives behind this trait.

use crate::domain::foundation::UserId;

/// Port turning one whitespace-free token into a user reference.
pub trait MentionParser: Send + Sync {
    /// Parse a mention token.
    ///
    /// Returns `None` if the token is not a well-formed mention.
    fn parse(&self, token: &str) -> Option<UserId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_parser_is_object_safe() {
        fn _accepts_dyn(_parser: &dyn MentionParser) {}
    }
}
