//! Budget simulator handlers.

mod get_budget_overview;
mod submit_allocation;

pub use get_budget_overview::{BudgetOverview, GetBudgetCandidatesHandler, GetBudgetOverviewHandler};
pub use submit_allocation::{SubmitAllocationCommand, SubmitAllocationHandler};
