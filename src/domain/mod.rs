//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, scheduled time, error codes)
//! - `recruitment` - Recruitment aggregate, headcount and snapshots
//! - `directory` - Guild member records
//! - `validation` - Validators for headcount, mentions and start time

pub mod directory;
pub mod foundation;
pub mod recruitment;
pub mod validation;
