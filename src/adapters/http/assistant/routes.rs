//! HTTP routes for assistant endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{get_assistant, send_message, set_grounding, AssistantHandlers};

pub fn assistant_routes(handlers: AssistantHandlers) -> Router {
    Router::new()
        .route("/", get(get_assistant))
        .route("/grounding", put(set_grounding))
        .route("/messages", post(send_message))
        .with_state(handlers)
}
