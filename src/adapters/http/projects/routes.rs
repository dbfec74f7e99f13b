//! HTTP routes for project endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_forum_post, add_forum_reply, add_progress_report, create_project, get_project,
    list_projects, update_project, ProjectHandlers,
};

pub fn project_routes(handlers: ProjectHandlers) -> Router {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", get(get_project).put(update_project))
        .route("/:id/reports", post(add_progress_report))
        .route("/:id/forum", post(add_forum_post))
        .route("/:id/forum/:post_id/replies", post(add_forum_reply))
        .with_state(handlers)
}
