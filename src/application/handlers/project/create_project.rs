//! CreateProjectHandler - Command handler for administrator-created projects.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::DomainError;
use crate::domain::locations::wards_of;
use crate::domain::project::{NewProject, OfficialProject};

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub project: NewProject,
}

pub struct CreateProjectHandler {
    store: Arc<PortalStore>,
}

impl CreateProjectHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// The ward must belong to the chosen sub-county.
    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<OfficialProject, DomainError> {
        let input = cmd.project;
        input.validate()?;
        let known_ward = wards_of(&input.sub_county)
            .map(|wards| wards.contains(&input.ward.as_str()))
            .unwrap_or(false);
        if !known_ward {
            return Err(DomainError::validation(
                "ward",
                format!("{} is not a ward of {}", input.ward, input.sub_county),
            ));
        }

        let project = self.store.apply(|s| s.add_official_project(input)).await?;
        info!(project_id = %project.id, name = %project.name, "project created");
        Ok(project)
    }
}
