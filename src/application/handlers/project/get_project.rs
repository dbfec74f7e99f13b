//! GetProjectHandler - Query handler for a single project with its
//! estimated completion.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::project::OfficialProject;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: OfficialProject,
    pub completion_percentage: u8,
}

pub struct GetProjectHandler {
    store: Arc<PortalStore>,
}

impl GetProjectHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &ProjectId, today: NaiveDate) -> Result<ProjectDetail, DomainError> {
        debug!(project_id = %id, "loading project");
        let snapshot = self.store.snapshot().await;
        let project = snapshot
            .project(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(ErrorCode::ProjectNotFound, id))?;
        Ok(ProjectDetail {
            completion_percentage: project.completion_percentage(today),
            project,
        })
    }
}
