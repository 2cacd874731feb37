//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the scheduled start value object and the error
//! codes that form the vocabulary of the recruitment domain.

mod errors;
mod ids;
mod scheduled_at;

pub use errors::ErrorCode;
pub use ids::{GuildId, RecruitmentId, UserId};
pub use scheduled_at::{ScheduledAt, DISPLAY_FORMAT};
