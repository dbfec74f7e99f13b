//! Shared fakes for handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::adapters::storage::InMemoryKeyValueStore;
use crate::application::PortalStore;
use crate::domain::aggregation::IdeaDigest;
use crate::domain::idea::ProjectIdea;
use crate::ports::{AIError, CivicIntelligence, ConversationRequest};

/// Deterministic collaborator. `None` fields fail with `Unavailable`.
#[derive(Default)]
pub struct FakeIntelligence {
    pub analysis: Option<serde_json::Value>,
    pub reply: Option<String>,
    pub enhanced: Option<String>,
    pub acknowledgement: Option<String>,
    pub conversations: Mutex<Vec<ConversationRequest>>,
    pub analyze_calls: Mutex<usize>,
}

impl FakeIntelligence {
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> Vec<ConversationRequest> {
        self.conversations.lock().unwrap().clone()
    }

    pub fn analyze_calls(&self) -> usize {
        *self.analyze_calls.lock().unwrap()
    }
}

fn answer<T: Clone>(value: &Option<T>) -> Result<T, AIError> {
    value.clone().ok_or_else(|| AIError::unavailable("offline"))
}

#[async_trait]
impl CivicIntelligence for FakeIntelligence {
    async fn analyze(&self, _ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError> {
        *self.analyze_calls.lock().unwrap() += 1;
        answer(&self.analysis)
    }

    async fn converse(&self, request: ConversationRequest) -> Result<String, AIError> {
        self.conversations.lock().unwrap().push(request);
        answer(&self.reply)
    }

    async fn enhance_text(&self, _text: &str) -> Result<String, AIError> {
        answer(&self.enhanced)
    }

    async fn acknowledge_submission(
        &self,
        _idea: &ProjectIdea,
        _similar_ideas: usize,
    ) -> Result<String, AIError> {
        answer(&self.acknowledgement)
    }
}

pub async fn seeded_store() -> (Arc<PortalStore>, InMemoryKeyValueStore) {
    let kv = InMemoryKeyValueStore::new();
    let store = PortalStore::load(Arc::new(kv.clone())).await.unwrap();
    (Arc::new(store), kv)
}
