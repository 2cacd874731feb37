//! Clock port - source of the current instant.

use chrono::{DateTime, Utc};

/// Port for reading wall-clock time.
///
/// Parsers take the current time from here instead of calling
/// `Utc::now()` directly so that relative expressions ("in 25 minutes",
/// "today at 21:00") can be tested deterministically.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}
