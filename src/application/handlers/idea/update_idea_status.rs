//! UpdateIdeaStatusHandler - Command handler for moderation status changes.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, ErrorCode, IdeaId};
use crate::domain::idea::{IdeaStatus, ProjectIdea};

#[derive(Debug, Clone)]
pub struct UpdateIdeaStatusCommand {
    pub idea_id: IdeaId,
    pub status: IdeaStatus,
}

pub struct UpdateIdeaStatusHandler {
    store: Arc<PortalStore>,
}

impl UpdateIdeaStatusHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Returns the updated idea.
    pub async fn handle(&self, cmd: UpdateIdeaStatusCommand) -> Result<ProjectIdea, DomainError> {
        let idea = self
            .store
            .apply(|s| {
                let next = s.update_idea_status(&cmd.idea_id, cmd.status)?;
                let idea = next
                    .idea(&cmd.idea_id)
                    .cloned()
                    .ok_or_else(|| DomainError::not_found(ErrorCode::IdeaNotFound, &cmd.idea_id))?;
                Ok((next, idea))
            })
            .await?;
        info!(idea_id = %cmd.idea_id, status = %cmd.status, "idea status updated");
        Ok(idea)
    }
}
