//! GetRecruitmentHandler - Query handler for re-rendering a recruitment.

use std::sync::Arc;

use super::CommandError;
use crate::domain::foundation::RecruitmentId;
use crate::domain::recruitment::RecruitmentSnapshot;
use crate::ports::RecruitmentStore;

/// Handler for reading the current state of a recruitment.
pub struct GetRecruitmentHandler {
    store: Arc<dyn RecruitmentStore>,
}

impl GetRecruitmentHandler {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, id: &RecruitmentId) -> Result<RecruitmentSnapshot, CommandError> {
        Ok(self.store.get(id)?)
    }
}
