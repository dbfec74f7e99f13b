//! HTTP handlers for assistant endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::assistant::AssistantService;

use super::dto::{GroundingRequest, GroundingResponse, MessageRequest};

#[derive(Clone)]
pub struct AssistantHandlers {
    pub service: Arc<AssistantService>,
}

/// GET /api/assistant - Grounding and transcript
pub async fn get_assistant(State(handlers): State<AssistantHandlers>) -> Response {
    Json(handlers.service.view().await).into_response()
}

/// PUT /api/assistant/grounding - Select a document or unground
pub async fn set_grounding(
    State(handlers): State<AssistantHandlers>,
    Json(req): Json<GroundingRequest>,
) -> Result<Response, ApiError> {
    let changed = handlers
        .service
        .select_document(req.document_id.as_ref())
        .await?;
    Ok(Json(GroundingResponse { changed }).into_response())
}

/// POST /api/assistant/messages - Send a message
pub async fn send_message(
    State(handlers): State<AssistantHandlers>,
    Json(req): Json<MessageRequest>,
) -> Result<Response, ApiError> {
    let outcome = handlers.service.send(&req.text).await?;
    Ok(Json(outcome).into_response())
}
