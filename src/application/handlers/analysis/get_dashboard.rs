//! GetDashboardHandler - Query handler for the public dashboard.
//!
//! Filters ideas and projects by location, analyses the matching ideas
//! and lists ongoing work.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::application::PortalStore;
use crate::domain::aggregation::{filter_ideas, filter_projects, ongoing_projects, Analysis, LocationFilter};
use crate::domain::idea::ProjectIdea;
use crate::domain::project::OfficialProject;

use super::AggregationEngine;

#[derive(Debug, Clone, Default)]
pub struct GetDashboardQuery {
    pub filter: LocationFilter,
    /// Free text matched against project name and description.
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub ideas: Vec<ProjectIdea>,
    pub projects: Vec<OfficialProject>,
    pub ongoing_projects: Vec<OfficialProject>,
    pub analysis: Analysis,
}

pub struct GetDashboardHandler {
    store: Arc<PortalStore>,
    engine: Arc<AggregationEngine>,
}

impl GetDashboardHandler {
    pub fn new(store: Arc<PortalStore>, engine: Arc<AggregationEngine>) -> Self {
        Self { store, engine }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> DashboardView {
        let snapshot = self.store.snapshot().await;
        let ideas = filter_ideas(&snapshot.ideas, &query.filter);
        let projects = filter_projects(&snapshot.projects, &query.filter, &query.search);
        let ongoing = ongoing_projects(&snapshot.projects, &query.filter);
        debug!(
            filter = ?query.filter,
            ideas = ideas.len(),
            projects = projects.len(),
            "dashboard filtered"
        );

        let analysis = self.engine.analyze(ideas.iter().copied()).await;

        DashboardView {
            ideas: ideas.into_iter().cloned().collect(),
            projects: projects.into_iter().cloned().collect(),
            ongoing_projects: ongoing.into_iter().cloned().collect(),
            analysis,
        }
    }
}
