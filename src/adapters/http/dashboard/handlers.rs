//! HTTP handlers for the dashboard, CSV exports and reference data.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::adapters::export::{ideas_to_csv, projects_to_csv};
use crate::application::handlers::analysis::{GetDashboardHandler, GetDashboardQuery};
use crate::application::handlers::idea::ListIdeasHandler;
use crate::application::handlers::project::ListProjectsHandler;
use crate::domain::aggregation::LocationFilter;
use crate::domain::locations::SUB_COUNTIES;
use crate::domain::seed;

use super::dto::{DashboardParams, DocumentSummary};

const IDEAS_FILE: &str = "project_ideas.csv";
const PROJECTS_FILE: &str = "official_projects.csv";

#[derive(Clone)]
pub struct DashboardHandlers {
    pub dashboard: Arc<GetDashboardHandler>,
    pub ideas: Arc<ListIdeasHandler>,
    pub projects: Arc<ListProjectsHandler>,
}

/// GET /api/dashboard - Filtered ideas, projects and priorities
pub async fn get_dashboard(
    State(handlers): State<DashboardHandlers>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let query = GetDashboardQuery {
        filter: LocationFilter::from_selection(params.sub_county, params.ward),
        search: params.search,
    };
    Json(handlers.dashboard.handle(query).await).into_response()
}

/// GET /api/export/ideas.csv - All ideas as CSV
pub async fn export_ideas(State(handlers): State<DashboardHandlers>) -> Response {
    let ideas = handlers.ideas.handle(&LocationFilter::all()).await;
    info!(rows = ideas.len(), "ideas exported");
    csv_attachment(ideas_to_csv(&ideas), IDEAS_FILE)
}

/// GET /api/export/projects.csv - All projects as CSV
pub async fn export_projects(State(handlers): State<DashboardHandlers>) -> Response {
    let projects = handlers.projects.handle(&LocationFilter::all(), "").await;
    info!(rows = projects.len(), "projects exported");
    csv_attachment(projects_to_csv(&projects), PROJECTS_FILE)
}

/// GET /api/documents - Documents the assistant can be grounded on
pub async fn list_documents() -> Response {
    let documents: Vec<DocumentSummary> = seed::county_documents()
        .iter()
        .map(DocumentSummary::from)
        .collect();
    Json(documents).into_response()
}

/// GET /api/locations - Sub-counties and their wards
pub async fn list_locations() -> Response {
    Json(SUB_COUNTIES).into_response()
}

fn csv_attachment(body: String, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}
