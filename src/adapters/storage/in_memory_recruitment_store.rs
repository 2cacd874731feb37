//! In-Memory Recruitment Store Adapter
//!
//! Keeps recruitments in a process-local map. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{RecruitmentId, UserId};
use crate::domain::recruitment::{Recruitment, RecruitmentError, RecruitmentSnapshot};
use crate::ports::RecruitmentStore;

type RecruitmentMap = HashMap<RecruitmentId, Recruitment>;

/// In-memory storage for recruitments.
///
/// One lock guards the whole map; every trait method holds it for exactly
/// one read-modify-write. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecruitmentStore {
    recruitments: Arc<RwLock<RecruitmentMap>>,
}

impl InMemoryRecruitmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored recruitments
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub fn clear(&self) {
        self.write().clear();
    }

    // A poisoned lock still holds a consistent map: aggregate mutations are
    // plain set operations that complete before the guard is released.
    fn read(&self) -> RwLockReadGuard<'_, RecruitmentMap> {
        self.recruitments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RecruitmentMap> {
        self.recruitments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate(
        &self,
        id: &RecruitmentId,
        f: impl FnOnce(&mut Recruitment),
    ) -> Option<RecruitmentSnapshot> {
        let mut recruitments = self.write();
        let recruitment = recruitments.get_mut(id)?;
        f(recruitment);
        Some(recruitment.snapshot())
    }
}

impl RecruitmentStore for InMemoryRecruitmentStore {
    fn create(&self, recruitment: Recruitment) -> Result<RecruitmentSnapshot, RecruitmentError> {
        let mut recruitments = self.write();
        let id = *recruitment.id();

        if recruitments.contains_key(&id) {
            return Err(RecruitmentError::already_exists(id));
        }

        let snapshot = recruitment.snapshot();
        recruitments.insert(id, recruitment);
        Ok(snapshot)
    }

    fn get(&self, id: &RecruitmentId) -> Result<RecruitmentSnapshot, RecruitmentError> {
        self.read()
            .get(id)
            .map(Recruitment::snapshot)
            .ok_or(RecruitmentError::not_found(*id))
    }

    fn set_participation(
        &self,
        id: &RecruitmentId,
        user_id: UserId,
        participating: bool,
    ) -> Option<RecruitmentSnapshot> {
        self.mutate(id, |r| r.set_participation(user_id, participating))
    }

    fn cancel_participation(
        &self,
        id: &RecruitmentId,
        user_id: UserId,
    ) -> Option<RecruitmentSnapshot> {
        self.mutate(id, |r| r.cancel_participation(user_id))
    }

    fn delete(&self, id: &RecruitmentId) -> bool {
        self.write().remove(id).is_some()
    }
}
