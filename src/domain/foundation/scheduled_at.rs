//! Scheduled start time value object.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format used when a start time is shown to users.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Absolute instant at which a recruitment is expected to start.
///
/// Always carries the canonical fixed offset it was parsed in, so two
/// instances produced by the same deployment compare and display
/// consistently regardless of the host timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduledAt(DateTime<FixedOffset>);

impl ScheduledAt {
    /// Creates a ScheduledAt from an offset-aware DateTime.
    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Returns the fixed offset this instant is expressed in.
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }
}

impl fmt::Display for ScheduledAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
