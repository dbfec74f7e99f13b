//! HTTP routes for idea endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    comment_on_idea, convert_idea, enhance_description, list_ideas, submit_idea,
    update_idea_status, vote_idea, IdeaHandlers,
};

pub fn idea_routes(handlers: IdeaHandlers) -> Router {
    Router::new()
        .route("/", get(list_ideas).post(submit_idea))
        .route("/enhance", post(enhance_description))
        .route("/:id/vote", post(vote_idea))
        .route("/:id/comments", post(comment_on_idea))
        .route("/:id/status", put(update_idea_status))
        .route("/:id/convert", post(convert_idea))
        .with_state(handlers)
}
