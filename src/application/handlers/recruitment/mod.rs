//! Recruitment command and query handlers.

mod close_recruitment;
mod errors;
mod get_recruitment;
mod respond_to_recruitment;
mod start_recruitment;

pub use close_recruitment::CloseRecruitmentHandler;
pub use errors::CommandError;
pub use get_recruitment::GetRecruitmentHandler;
pub use respond_to_recruitment::{
    ParticipationResponse, RespondCommand, RespondToRecruitmentHandler,
};
pub use start_recruitment::{StartRecruitmentCommand, StartRecruitmentHandler};
