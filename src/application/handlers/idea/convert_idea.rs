//! ConvertIdeaHandler - Command handler turning an idea into a project.
//!
//! Ideas and projects are written together. A failed write leaves both
//! the stored collections and the in-memory state as they were.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, IdeaId, Timestamp};
use crate::domain::project::OfficialProject;

#[derive(Debug, Clone)]
pub struct ConvertIdeaCommand {
    pub idea_id: IdeaId,
}

pub struct ConvertIdeaHandler {
    store: Arc<PortalStore>,
}

impl ConvertIdeaHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ConvertIdeaCommand) -> Result<OfficialProject, DomainError> {
        let today = Timestamp::now().date();
        let project = self
            .store
            .apply(|s| s.convert_idea_to_project(&cmd.idea_id, today))
            .await?;
        info!(idea_id = %cmd.idea_id, project_id = %project.id, "idea converted to project");
        Ok(project)
    }
}
