//! HTTP adapter for the budget simulator.

mod dto;
mod handlers;
mod routes;

pub use dto::{DraftRequest, DraftResponse, SubmissionResponse};
pub use handlers::BudgetHandlers;
pub use routes::budget_routes;
