//! SubmitIdeaHandler - Command handler for citizen idea submissions.
//!
//! Stores the idea, then asks the collaborator for a personal
//! acknowledgement. The acknowledgement never fails the command.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::PortalStore;
use crate::domain::concierge::{count_similar_ideas, fallback_acknowledgement};
use crate::domain::foundation::DomainError;
use crate::domain::idea::{NewIdea, ProjectIdea};
use crate::ports::CivicIntelligence;

/// Command to submit a new idea.
#[derive(Debug, Clone)]
pub struct SubmitIdeaCommand {
    pub idea: NewIdea,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitIdeaResult {
    pub idea: ProjectIdea,
    /// Ideas already on file that share a title word with this one.
    pub similar_ideas: usize,
    pub acknowledgement: String,
}

pub struct SubmitIdeaHandler {
    store: Arc<PortalStore>,
    intelligence: Arc<dyn CivicIntelligence>,
}

impl SubmitIdeaHandler {
    pub fn new(store: Arc<PortalStore>, intelligence: Arc<dyn CivicIntelligence>) -> Self {
        Self {
            store,
            intelligence,
        }
    }

    pub async fn handle(&self, cmd: SubmitIdeaCommand) -> Result<SubmitIdeaResult, DomainError> {
        let (idea, existing) = self
            .store
            .apply(|s| {
                let (next, idea) = s.add_idea(cmd.idea)?;
                Ok((next, (idea, s.ideas.clone())))
            })
            .await?;
        info!(idea_id = %idea.id, channel = ?idea.submitted_via, "idea submitted");

        let similar_ideas = count_similar_ideas(&idea, &existing);
        let acknowledgement = match self
            .intelligence
            .acknowledge_submission(&idea, similar_ideas)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!(idea_id = %idea.id, "empty acknowledgement, using template");
                fallback_acknowledgement(&idea)
            }
            Err(e) => {
                warn!(idea_id = %idea.id, error = %e, "acknowledgement failed, using template");
                fallback_acknowledgement(&idea)
            }
        };

        Ok(SubmitIdeaResult {
            idea,
            similar_ideas,
            acknowledgement,
        })
    }
}
