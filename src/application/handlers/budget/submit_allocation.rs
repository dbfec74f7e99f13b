//! SubmitAllocationHandler - Command handler for citizen budget submissions.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::PortalStore;
use crate::domain::budget::BudgetAllocation;
use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone)]
pub struct SubmitAllocationCommand {
    pub allocation: BudgetAllocation,
}

pub struct SubmitAllocationHandler {
    store: Arc<PortalStore>,
}

impl SubmitAllocationHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Returns the number of stored submissions after this one.
    pub async fn handle(&self, cmd: SubmitAllocationCommand) -> Result<usize, DomainError> {
        let total = cmd.allocation.total();
        let result = self
            .store
            .apply(|s| {
                let next = s.submit_allocation(cmd.allocation)?;
                let count = next.budget_submissions.len();
                Ok((next, count))
            })
            .await;
        let count = match result {
            Ok(count) => count,
            Err(e) => {
                if e.code == ErrorCode::BudgetExceeded {
                    warn!(allocated = total, "allocation rejected, over budget");
                }
                return Err(e);
            }
        };
        info!(allocated = total, submissions = count, "budget allocation submitted");
        Ok(count)
    }
}
