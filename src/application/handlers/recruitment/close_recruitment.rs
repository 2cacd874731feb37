//! CloseRecruitmentHandler - Command handler for ending a recruitment.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::RecruitmentId;
use crate::ports::RecruitmentStore;

/// Handler for closing recruitments.
///
/// Closing is idempotent. Later button presses on a closed recruitment are
/// answered with `NotFound` by the respond handler.
pub struct CloseRecruitmentHandler {
    store: Arc<dyn RecruitmentStore>,
}

impl CloseRecruitmentHandler {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    /// Returns `true` if the recruitment was open until now.
    pub fn handle(&self, id: &RecruitmentId) -> bool {
        let removed = self.store.delete(id);
        if removed {
            info!(recruitment_id = %id, "Recruitment closed");
        } else {
            debug!(recruitment_id = %id, "Recruitment already closed");
        }
        removed
    }
}
