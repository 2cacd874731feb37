//! Storage Adapters
//!
//! Implementations of the RecruitmentStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryRecruitmentStore** - Stores recruitments in process memory
//!
//! ## Usage
//!
//! ```ignore
//! use group_recruit::adapters::storage::InMemoryRecruitmentStore;
//!
//! let store = Arc::new(InMemoryRecruitmentStore::new());
//! let snapshot = store.create(recruitment)?;
//! ```

mod in_memory_recruitment_store;

pub use in_memory_recruitment_store::InMemoryRecruitmentStore;
