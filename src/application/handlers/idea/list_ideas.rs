//! ListIdeasHandler - Query handler for ideas, optionally by location.

use std::sync::Arc;
use tracing::debug;

use crate::application::PortalStore;
use crate::domain::aggregation::{filter_ideas, LocationFilter};
use crate::domain::idea::ProjectIdea;

pub struct ListIdeasHandler {
    store: Arc<PortalStore>,
}

impl ListIdeasHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Newest first.
    pub async fn handle(&self, filter: &LocationFilter) -> Vec<ProjectIdea> {
        let snapshot = self.store.snapshot().await;
        let ideas: Vec<ProjectIdea> = filter_ideas(&snapshot.ideas, filter)
            .into_iter()
            .cloned()
            .collect();
        debug!(filter = ?filter, count = ideas.len(), "ideas listed");
        ideas
    }
}
