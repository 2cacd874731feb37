//! Recruitment domain module.
//!
//! A recruitment tracks who joined, who declined and when the activity is
//! expected to start. Users change their answer any number of times until
//! the recruitment is closed.

mod aggregate;
mod errors;
mod headcount;
mod snapshot;

pub use aggregate::Recruitment;
pub use errors::RecruitmentError;
pub use headcount::Headcount;
pub use snapshot::RecruitmentSnapshot;
