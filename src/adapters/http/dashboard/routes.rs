//! HTTP routes for the dashboard, exports and reference data.

use axum::{routing::get, Router};

use super::handlers::{
    export_ideas, export_projects, get_dashboard, list_documents, list_locations,
    DashboardHandlers,
};

pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/export/ideas.csv", get(export_ideas))
        .route("/export/projects.csv", get(export_projects))
        .route("/documents", get(list_documents))
        .route("/locations", get(list_locations))
        .with_state(handlers)
}
