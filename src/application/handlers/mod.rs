//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod recruitment;

pub use recruitment::{
    CloseRecruitmentHandler, CommandError, GetRecruitmentHandler, ParticipationResponse,
    RespondCommand, RespondToRecruitmentHandler, StartRecruitmentCommand,
    StartRecruitmentHandler,
};
