//! HTTP routes for budget endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    evaluate_draft, get_candidates, get_overview, submit_allocation, BudgetHandlers,
};

pub fn budget_routes(handlers: BudgetHandlers) -> Router {
    Router::new()
        .route("/", get(get_overview))
        .route("/candidates", get(get_candidates))
        .route("/draft", post(evaluate_draft))
        .route("/submissions", post(submit_allocation))
        .with_state(handlers)
}
