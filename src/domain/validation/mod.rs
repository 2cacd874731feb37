//! Input validation.
//!
//! Three independent validators turn raw command options into domain
//! values. Each either returns a normalized value or a [`ValidationError`];
//! none of them touch the recruitment store.
//!
//! - `headcount` - 2, 3, 5 or 10, defaulting to 5
//! - `schedule` - free-text start time in four accepted forms
//! - `participants` - space-separated mentions checked against the guild

mod errors;
mod headcount;
mod participants;
mod schedule;

pub use errors::ValidationError;
pub use headcount::validate_headcount;
pub use participants::ParticipantsValidator;
pub use schedule::{is_valid_date, is_valid_time, ScheduleParser, DEFAULT_LEAD_MINUTES};
