//! Clock and id generator adapters.
//!
//! - `SystemClock` - Wall-clock time
//! - `FixedClock` - Settable time for tests and replays
//! - `UuidRecruitmentIdGenerator` - Random v4 UUIDs

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::foundation::RecruitmentId;
use crate::ports::{Clock, RecruitmentIdGenerator};

/// Clock reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Set the current instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move the current instant forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Generates random v4 UUID recruitment ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRecruitmentIdGenerator;

impl RecruitmentIdGenerator for UuidRecruitmentIdGenerator {
    fn next_id(&self) -> RecruitmentId {
        RecruitmentId::from_uuid(Uuid::new_v4())
    }
}
