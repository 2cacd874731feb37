//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (start, respond, close) are kept apart from the query
//! handler (get).

mod context;
pub mod handlers;

pub use context::RecruitmentContext;
pub use handlers::{
    CloseRecruitmentHandler, CommandError, GetRecruitmentHandler, ParticipationResponse,
    RespondCommand, RespondToRecruitmentHandler, StartRecruitmentCommand,
    StartRecruitmentHandler,
};
