//! Mention parser adapters.
//!
//! - `AngleBracketMentionParser` - `<@123>` / `<@!123>` style user mentions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::UserId;
use crate::ports::MentionParser;

static USER_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@!?([0-9]+)>$").expect("static regex"));

/// Parses user mentions written as `<@id>` or the legacy nickname form
/// `<@!id>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleBracketMentionParser;

impl MentionParser for AngleBracketMentionParser {
    fn parse(&self, token: &str) -> Option<UserId> {
        let caps = USER_MENTION.captures(token)?;
        caps.get(1)?.as_str().parse().ok()
    }
}
