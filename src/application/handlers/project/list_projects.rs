//! ListProjectsHandler - Query handler for official projects.

use std::sync::Arc;
use tracing::debug;

use crate::application::PortalStore;
use crate::domain::aggregation::{filter_projects, LocationFilter};
use crate::domain::project::OfficialProject;

pub struct ListProjectsHandler {
    store: Arc<PortalStore>,
}

impl ListProjectsHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, filter: &LocationFilter, search: &str) -> Vec<OfficialProject> {
        let snapshot = self.store.snapshot().await;
        let projects: Vec<OfficialProject> = filter_projects(&snapshot.projects, filter, search)
            .into_iter()
            .cloned()
            .collect();
        debug!(filter = ?filter, search, count = projects.len(), "projects listed");
        projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::seeded_store;

    #[tokio::test]
    async fn search_matches_name_case_insensitively() {
        let (store, _) = seeded_store().await;
        let handler = ListProjectsHandler::new(store.clone());
        let name = store.snapshot().await.projects[0].name.clone();

        let found = handler
            .handle(&LocationFilter::all(), &name.to_uppercase())
            .await;
        assert!(found.iter().any(|p| p.name == name));
    }
}
