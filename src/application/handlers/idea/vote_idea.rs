//! VoteIdeaHandler - Command handler for upvoting an idea.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, IdeaId};
use crate::domain::store::VoteOutcome;

#[derive(Debug, Clone)]
pub struct VoteIdeaCommand {
    pub idea_id: IdeaId,
}

pub struct VoteIdeaHandler {
    store: Arc<PortalStore>,
}

impl VoteIdeaHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Repeat votes and unknown ids are reported, not rejected.
    pub async fn handle(&self, cmd: VoteIdeaCommand) -> Result<VoteOutcome, DomainError> {
        let outcome = self.store.apply(|s| Ok(s.vote_idea(&cmd.idea_id))).await?;
        match outcome {
            VoteOutcome::Counted { votes } => info!(idea_id = %cmd.idea_id, votes, "vote counted"),
            other => debug!(idea_id = %cmd.idea_id, outcome = ?other, "vote ignored"),
        }
        Ok(outcome)
    }
}
