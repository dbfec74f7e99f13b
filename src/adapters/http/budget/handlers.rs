//! HTTP handlers for budget endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::budget::{
    GetBudgetCandidatesHandler, GetBudgetOverviewHandler, SubmitAllocationCommand,
    SubmitAllocationHandler,
};
use crate::domain::budget::BudgetAllocation;

use super::dto::{DraftRequest, DraftResponse, SubmissionResponse};

#[derive(Clone)]
pub struct BudgetHandlers {
    pub overview: Arc<GetBudgetOverviewHandler>,
    pub candidates: Arc<GetBudgetCandidatesHandler>,
    pub submit: Arc<SubmitAllocationHandler>,
}

/// GET /api/budget - People's Budget next to the official allocation
pub async fn get_overview(State(handlers): State<BudgetHandlers>) -> Response {
    Json(handlers.overview.handle().await).into_response()
}

/// GET /api/budget/candidates - Topics offered in the simulator
pub async fn get_candidates(State(handlers): State<BudgetHandlers>) -> Response {
    Json(handlers.candidates.handle().await).into_response()
}

/// POST /api/budget/draft - Totals for unsaved slider values
pub async fn evaluate_draft(Json(req): Json<DraftRequest>) -> Response {
    Json(DraftResponse::from(req.into_draft())).into_response()
}

/// POST /api/budget/submissions - Submit an allocation
pub async fn submit_allocation(
    State(handlers): State<BudgetHandlers>,
    Json(allocation): Json<BudgetAllocation>,
) -> Result<Response, ApiError> {
    let submission_count = handlers
        .submit
        .handle(SubmitAllocationCommand { allocation })
        .await?;
    Ok((StatusCode::CREATED, Json(SubmissionResponse { submission_count })).into_response())
}
