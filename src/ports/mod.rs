//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RecruitmentStore` - Keyed, concurrency-safe recruitment storage
//! - `MemberDirectory` / `MemberDirectoryWriter` - Guild membership read model
//!
//! ## Capability Ports
//!
//! - `Clock` - Current instant
//! - `RecruitmentIdGenerator` - Opaque unique ids
//! - `MentionParser` - Platform-specific mention syntax

mod clock;
mod id_generator;
mod member_directory;
mod mention_parser;
mod recruitment_store;

pub use clock::Clock;
pub use id_generator::RecruitmentIdGenerator;
pub use member_directory::{MemberDirectory, MemberDirectoryWriter};
pub use mention_parser::MentionParser;
pub use recruitment_store::RecruitmentStore;
