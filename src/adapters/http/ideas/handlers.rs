//! HTTP handlers for idea endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_id, ApiError};
use crate::application::handlers::idea::{
    CommentOnIdeaCommand, CommentOnIdeaHandler, ConvertIdeaCommand, ConvertIdeaHandler,
    EnhanceDescriptionHandler, ListIdeasHandler, SubmitIdeaCommand, SubmitIdeaHandler,
    UpdateIdeaStatusCommand, UpdateIdeaStatusHandler, VoteIdeaCommand, VoteIdeaHandler,
};
use crate::domain::aggregation::LocationFilter;
use crate::domain::foundation::IdeaId;
use crate::domain::idea::NewIdea;

use super::dto::{
    CommentRequest, IdeaListQuery, StatusRequest, SubmitIdeaResponse, TextBody, VoteResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IdeaHandlers {
    pub list: Arc<ListIdeasHandler>,
    pub submit: Arc<SubmitIdeaHandler>,
    pub vote: Arc<VoteIdeaHandler>,
    pub comment: Arc<CommentOnIdeaHandler>,
    pub update_status: Arc<UpdateIdeaStatusHandler>,
    pub convert: Arc<ConvertIdeaHandler>,
    pub enhance: Arc<EnhanceDescriptionHandler>,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ideas - List ideas, optionally by sub-county and ward
pub async fn list_ideas(
    State(handlers): State<IdeaHandlers>,
    Query(query): Query<IdeaListQuery>,
) -> Response {
    let filter = LocationFilter::from_selection(query.sub_county, query.ward);
    Json(handlers.list.handle(&filter).await).into_response()
}

/// POST /api/ideas - Submit a new idea
pub async fn submit_idea(
    State(handlers): State<IdeaHandlers>,
    Json(idea): Json<NewIdea>,
) -> Result<Response, ApiError> {
    let result = handlers.submit.handle(SubmitIdeaCommand { idea }).await?;
    Ok((StatusCode::CREATED, Json(SubmitIdeaResponse::from(result))).into_response())
}

/// POST /api/ideas/enhance - Expand a short description
pub async fn enhance_description(
    State(handlers): State<IdeaHandlers>,
    Json(body): Json<TextBody>,
) -> Response {
    let text = handlers.enhance.handle(&body.text).await;
    Json(TextBody { text }).into_response()
}

/// POST /api/ideas/:id/vote - Upvote an idea
pub async fn vote_idea(
    State(handlers): State<IdeaHandlers>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(idea_id) = id.parse::<IdeaId>() else {
        return Ok(bad_id("idea", &id));
    };
    let outcome = handlers.vote.handle(VoteIdeaCommand { idea_id }).await?;
    Ok(Json(VoteResponse::from(outcome)).into_response())
}

/// POST /api/ideas/:id/comments - Comment on an idea
pub async fn comment_on_idea(
    State(handlers): State<IdeaHandlers>,
    Path(id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> Result<Response, ApiError> {
    let Ok(idea_id) = id.parse::<IdeaId>() else {
        return Ok(bad_id("idea", &id));
    };
    let comment = handlers
        .comment
        .handle(CommentOnIdeaCommand {
            idea_id,
            author: req.author,
            text: req.text,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(comment)).into_response())
}

/// PUT /api/ideas/:id/status - Set the moderation status
pub async fn update_idea_status(
    State(handlers): State<IdeaHandlers>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Response, ApiError> {
    let Ok(idea_id) = id.parse::<IdeaId>() else {
        return Ok(bad_id("idea", &id));
    };
    let idea = handlers
        .update_status
        .handle(UpdateIdeaStatusCommand {
            idea_id,
            status: req.status,
        })
        .await?;
    Ok(Json(idea).into_response())
}

/// POST /api/ideas/:id/convert - Promote an idea to an official project
pub async fn convert_idea(
    State(handlers): State<IdeaHandlers>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(idea_id) = id.parse::<IdeaId>() else {
        return Ok(bad_id("idea", &id));
    };
    let project = handlers.convert.handle(ConvertIdeaCommand { idea_id }).await?;
    Ok((StatusCode::CREATED, Json(project)).into_response())
}
