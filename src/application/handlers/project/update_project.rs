//! UpdateProjectHandler - full replacement of an official project.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::DomainError;
use crate::domain::project::OfficialProject;

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    pub project: OfficialProject,
}

pub struct UpdateProjectHandler {
    store: Arc<PortalStore>,
}

impl UpdateProjectHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Last writer wins.
    pub async fn handle(&self, cmd: UpdateProjectCommand) -> Result<OfficialProject, DomainError> {
        let project = cmd.project;
        let id = project.id.clone();
        self.store
            .apply(|s| Ok((s.update_official_project(project.clone())?, ())))
            .await?;
        info!(project_id = %id, status = %project.status, "project updated");
        Ok(project)
    }
}
