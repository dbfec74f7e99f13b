//! CivicIntelligence used when no AI provider is configured.
//!
//! Every call fails with `Unavailable`, so the application serves its
//! fixed fallbacks.

use async_trait::async_trait;

use crate::domain::aggregation::IdeaDigest;
use crate::domain::idea::ProjectIdea;
use crate::ports::{AIError, CivicIntelligence, ConversationRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredIntelligence;

const REASON: &str = "no AI provider configured";

#[async_trait]
impl CivicIntelligence for UnconfiguredIntelligence {
    async fn analyze(&self, _ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError> {
        Err(AIError::unavailable(REASON))
    }

    async fn converse(&self, _request: ConversationRequest) -> Result<String, AIError> {
        Err(AIError::unavailable(REASON))
    }

    async fn enhance_text(&self, _text: &str) -> Result<String, AIError> {
        Err(AIError::unavailable(REASON))
    }

    async fn acknowledge_submission(
        &self,
        _idea: &ProjectIdea,
        _similar_ideas: usize,
    ) -> Result<String, AIError> {
        Err(AIError::unavailable(REASON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_unavailable() {
        let err = UnconfiguredIntelligence.enhance_text("x").await.unwrap_err();
        assert!(matches!(err, AIError::Unavailable { .. }));
    }
}
