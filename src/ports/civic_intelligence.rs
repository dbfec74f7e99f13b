//! CivicIntelligence port - the AI collaborator seen by the portal core.
//!
//! The core never talks to an LLM directly. It asks this port to cluster
//! ideas, answer a chat turn, expand a short description, or phrase an
//! acknowledgement. Callers own all fallbacks: every method may fail and
//! the application layer substitutes fixed values.

use async_trait::async_trait;

use crate::domain::aggregation::IdeaDigest;
use crate::domain::assistant::ChatMessage;
use crate::domain::idea::ProjectIdea;

use super::AIError;

/// One chat turn sent to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRequest {
    /// Persona or grounding instruction.
    pub instruction: String,
    /// Transcript before the new message, oldest first.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[async_trait]
pub trait CivicIntelligence: Send + Sync {
    /// Clusters ideas into priorities and sentiment.
    ///
    /// Returns the raw structured payload; shape validation is the
    /// caller's job.
    async fn analyze(&self, ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError>;

    /// Produces the assistant's reply to one chat turn.
    async fn converse(&self, request: ConversationRequest) -> Result<String, AIError>;

    /// Expands a short idea description.
    async fn enhance_text(&self, text: &str) -> Result<String, AIError>;

    /// Phrases a personal acknowledgement for a fresh submission.
    async fn acknowledge_submission(
        &self,
        idea: &ProjectIdea,
        similar_ideas: usize,
    ) -> Result<String, AIError>;
}
