//! LLM-backed CivicIntelligence implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::aggregation::IdeaDigest;
use crate::domain::assistant::ChatRole;
use crate::domain::concierge;
use crate::domain::idea::ProjectIdea;
use crate::ports::{
    AIError, AIProvider, CivicIntelligence, CompletionRequest, ConversationRequest, Message,
    MessageRole,
};

/// Civic intelligence built on a generic completion provider.
pub struct LlmCivicIntelligence {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmCivicIntelligence {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    fn create_analysis_prompt(&self, ideas: &[IdeaDigest]) -> Result<String, AIError> {
        let submissions = serde_json::to_string_pretty(ideas)
            .map_err(|e| AIError::InvalidRequest(format!("Failed to encode submissions: {}", e)))?;

        Ok(format!(
            r#"You are an expert policy analyst for Homa Bay County. Analyze the project ideas submitted by citizens.
Some submissions from SMS have been pre-categorized. Use these categories as a strong hint for clustering.

Submissions:
{submissions}

1. Group the submissions into logical topics (e.g. "Water & Sanitation", "Road Repairs", "Healthcare Facilities").
2. Count how many submissions belong to each topic.
3. For each topic give a realistic total estimated budget in Kenyan Shillings (KES) for the whole cluster, based on the number of submissions and their scope.
4. Keep the 5 most frequently requested topics.
5. Classify each submission's tone as positive, neutral or negative and count the totals.

Reply with JSON only, in exactly this shape:
{{
  "topPriorities": [{{"topic": "string", "count": 0, "description": "one sentence", "cost": 0}}],
  "sentiment": {{"positive": 0, "neutral": 0, "negative": 0}}
}}"#
        ))
    }

    fn create_enhance_prompt(&self, text: &str) -> String {
        format!(
            "A citizen wrote this short description of a community project idea:\n\n\"{}\"\n\n\
             Rewrite it as a clear, detailed description of two to four sentences that explains \
             the problem, who benefits and what should be built. Keep the citizen's intent and \
             do not invent figures. Reply with the description only.",
            text
        )
    }

    /// Strips a Markdown code fence some models wrap JSON in.
    fn strip_code_fence(content: &str) -> &str {
        let trimmed = content.trim();
        let Some(rest) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        rest.strip_suffix("```").unwrap_or(rest).trim()
    }

    fn to_message(message: &crate::domain::assistant::ChatMessage) -> Message {
        let role = match message.role {
            ChatRole::User => MessageRole::User,
            ChatRole::Model => MessageRole::Assistant,
        };
        Message::new(role, message.text.clone())
    }

    async fn complete_text(&self, request: CompletionRequest) -> Result<String, AIError> {
        let response = self.ai_provider.complete(request).await?;
        let text = response.content.trim().to_string();
        if text.is_empty() {
            return Err(AIError::parse("empty completion"));
        }
        Ok(text)
    }
}

#[async_trait]
impl CivicIntelligence for LlmCivicIntelligence {
    async fn analyze(&self, ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError> {
        let prompt = self.create_analysis_prompt(ideas)?;
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompt)
            .with_temperature(0.2)
            .expecting_json();

        let response = self.ai_provider.complete(request).await?;
        serde_json::from_str(Self::strip_code_fence(&response.content))
            .map_err(|e| AIError::parse(format!("Failed to parse analysis: {}", e)))
    }

    async fn converse(&self, request: ConversationRequest) -> Result<String, AIError> {
        let completion = CompletionRequest::new()
            .with_system_prompt(request.instruction)
            .with_messages(request.history.iter().map(Self::to_message))
            .with_message(MessageRole::User, request.message);

        self.complete_text(completion).await
    }

    async fn enhance_text(&self, text: &str) -> Result<String, AIError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, self.create_enhance_prompt(text))
            .with_temperature(0.5)
            .with_max_tokens(400);

        self.complete_text(request).await
    }

    async fn acknowledge_submission(
        &self,
        idea: &ProjectIdea,
        similar_ideas: usize,
    ) -> Result<String, AIError> {
        let request = CompletionRequest::new()
            .with_message(
                MessageRole::User,
                concierge::acknowledgement_prompt(idea, similar_ideas),
            )
            .with_temperature(0.7);

        self.complete_text(request).await
    }
}
