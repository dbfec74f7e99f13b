//! Budget allocation model.
//!
//! Citizens split [`TOTAL_BUDGET`] across priority topics. Accepted
//! allocations are averaged into the People's Budget and compared with
//! [`OFFICIAL_BUDGET`].

mod allocation;
mod draft;
mod official;

pub use allocation::{
    compute_peoples_budget, validate_allocation, AllocationAmount, BudgetAllocation,
    PeoplesBudget, TOTAL_BUDGET,
};
pub use draft::AllocationDraft;
pub use official::{
    official_categories, BudgetComparison, BudgetLine, ComparisonRow, OFFICIAL_BUDGET,
};
