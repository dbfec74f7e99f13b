//! AssistantService - drives the conversational assistant.
//!
//! The session lives behind a mutex that is never held across the
//! collaborator call. A reply is applied only if the grounding it was
//! requested under is still active. The ungrounded transcript is written
//! to the chat history collection after every change.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::application::PortalStore;
use crate::domain::assistant::{
    AssistantError, AssistantSession, ChatMessage, Grounding, TurnOutcome,
};
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::domain::seed;
use crate::ports::{CivicIntelligence, ConversationRequest};

/// What happened to a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum SendOutcome {
    /// The model reply, or the fixed connection-failure message.
    Replied(ChatMessage),
    /// Blank input; nothing was sent.
    Ignored,
    /// The grounding changed before the reply arrived.
    Discarded,
}

/// Current assistant state as shown to the citizen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantView {
    pub document_id: Option<DocumentId>,
    pub busy: bool,
    pub history: Vec<ChatMessage>,
}

pub struct AssistantService {
    session: Mutex<AssistantSession>,
    intelligence: Arc<dyn CivicIntelligence>,
    store: Arc<PortalStore>,
}

impl AssistantService {
    /// Resumes the stored ungrounded transcript.
    pub async fn resume(store: Arc<PortalStore>, intelligence: Arc<dyn CivicIntelligence>) -> Self {
        let history = store.snapshot().await.chat_history.to_vec();
        debug!(messages = history.len(), "assistant transcript resumed");
        Self {
            session: Mutex::new(AssistantSession::with_history(history)),
            intelligence,
            store,
        }
    }

    pub async fn view(&self) -> AssistantView {
        let session = self.session.lock().await;
        AssistantView {
            document_id: session.grounding().document_id().cloned(),
            busy: session.is_busy(),
            history: session.history().to_vec(),
        }
    }

    /// Grounds the assistant on a document, or ungrounds it with `None`.
    ///
    /// Returns whether the grounding changed.
    pub async fn select_document(&self, document_id: Option<&DocumentId>) -> Result<bool, DomainError> {
        let grounding = match document_id {
            None => Grounding::Ungrounded,
            Some(id) => {
                let document = seed::county_document(id)
                    .ok_or_else(|| DomainError::not_found(ErrorCode::DocumentNotFound, id))?;
                Grounding::Grounded(document.clone())
            }
        };

        let (changed, transcript) = {
            let mut session = self.session.lock().await;
            let changed = session.set_grounding(grounding);
            (changed, ungrounded_transcript(&session).unwrap_or_default())
        };

        if changed {
            info!(document_id = ?document_id.map(DocumentId::as_str), "assistant grounding changed");
            // The stored transcript follows the cleared session either way.
            self.persist(transcript).await?;
        }
        Ok(changed)
    }

    pub async fn send(&self, text: &str) -> Result<SendOutcome, DomainError> {
        let turn = {
            let mut session = self.session.lock().await;
            match session.begin_turn(text) {
                Ok(turn) => turn,
                Err(AssistantError::EmptyMessage) => return Ok(SendOutcome::Ignored),
                Err(e) => return Err(e.into()),
            }
        };

        let request = ConversationRequest {
            instruction: turn.instruction.clone(),
            history: turn.history.clone(),
            message: turn.message.clone(),
        };
        let reply = match self.intelligence.converse(request).await {
            Ok(reply) if !reply.trim().is_empty() => Some(reply.trim().to_string()),
            Ok(_) => {
                warn!("empty assistant reply");
                None
            }
            Err(e) => {
                warn!(error = %e, "assistant reply failed");
                None
            }
        };

        let (outcome, transcript) = {
            let mut session = self.session.lock().await;
            let outcome = session.complete_turn(&turn, reply);
            (outcome, ungrounded_transcript(&session))
        };

        match outcome {
            TurnOutcome::Applied(message) => {
                debug!(generation = turn.generation, "assistant reply applied");
                if let Some(history) = transcript {
                    self.persist(history).await?;
                }
                Ok(SendOutcome::Replied(message))
            }
            TurnOutcome::Discarded => {
                info!(generation = turn.generation, "stale assistant reply discarded");
                Ok(SendOutcome::Discarded)
            }
        }
    }

    async fn persist(&self, history: Vec<ChatMessage>) -> Result<(), DomainError> {
        self.store
            .apply(|s| Ok((s.with_chat_history(history), ())))
            .await
    }
}

fn ungrounded_transcript(session: &AssistantSession) -> Option<Vec<ChatMessage>> {
    match session.grounding() {
        Grounding::Ungrounded => Some(session.history().to_vec()),
        Grounding::Grounded(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seeded_store, FakeIntelligence};
    use crate::domain::aggregation::IdeaDigest;
    use crate::domain::assistant::{ChatRole, CONNECTION_FAILURE_REPLY};
    use crate::domain::idea::ProjectIdea;
    use crate::ports::{AIError, KeyValueStore};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn doc(id: &str) -> DocumentId {
        DocumentId::new(id).unwrap()
    }

    fn replying(text: &str) -> Arc<FakeIntelligence> {
        Arc::new(FakeIntelligence {
            reply: Some(text.to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn reply_is_appended_and_persisted_when_ungrounded() {
        let (store, kv) = seeded_store().await;
        let service = AssistantService::resume(store.clone(), replying("Karibu!")).await;

        let SendOutcome::Replied(message) = service.send("Habari").await.unwrap() else {
            panic!("expected a reply");
        };

        assert_eq!(message.text, "Karibu!");
        let history = store.snapshot().await.chat_history.to_vec();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert!(kv.get("chatHistory").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn failure_appends_connection_message() {
        let (store, _) = seeded_store().await;
        let service =
            AssistantService::resume(store, Arc::new(FakeIntelligence::unreachable())).await;

        let SendOutcome::Replied(message) = service.send("Habari").await.unwrap() else {
            panic!("expected a reply");
        };
        assert_eq!(message.text, CONNECTION_FAILURE_REPLY);
        assert_eq!(message.role, ChatRole::Model);
    }

    #[tokio::test]
    async fn blank_message_is_ignored() {
        let (store, _) = seeded_store().await;
        let ai = replying("unused");
        let service = AssistantService::resume(store, ai.clone()).await;

        assert_eq!(service.send("   ").await.unwrap(), SendOutcome::Ignored);
        assert!(ai.conversations().is_empty());
    }

    #[tokio::test]
    async fn regrounding_clears_history_and_instruction() {
        let (store, _) = seeded_store().await;
        let ai = replying("From the document.");
        let service = AssistantService::resume(store.clone(), ai.clone()).await;

        assert!(service.select_document(Some(&doc("doc-cidp"))).await.unwrap());
        service.send("What is planned?").await.unwrap();
        assert_eq!(service.view().await.history.len(), 2);

        assert!(service.select_document(Some(&doc("doc-budget-2024"))).await.unwrap());
        assert!(service.view().await.history.is_empty());

        service.send("How much for water?").await.unwrap();
        let calls = ai.conversations();
        assert_ne!(calls[0].instruction, calls[1].instruction);
        assert!(calls[1].history.is_empty());
        // Grounded transcripts are not stored.
        assert!(store.snapshot().await.chat_history.is_empty());
    }

    #[tokio::test]
    async fn grounding_clears_the_stored_transcript() {
        let (store, kv) = seeded_store().await;
        let service = AssistantService::resume(store.clone(), replying("Karibu!")).await;

        service.send("Habari").await.unwrap();
        assert_eq!(store.snapshot().await.chat_history.len(), 2);

        service.select_document(Some(&doc("doc-cidp"))).await.unwrap();
        assert!(store.snapshot().await.chat_history.is_empty());

        let reloaded = Arc::new(PortalStore::load(Arc::new(kv)).await.unwrap());
        let resumed = AssistantService::resume(reloaded, replying("ok")).await;
        assert!(resumed.view().await.history.is_empty());
    }

    #[tokio::test]
    async fn same_document_twice_is_a_no_op() {
        let (store, _) = seeded_store().await;
        let service = AssistantService::resume(store, replying("ok")).await;

        assert!(service.select_document(Some(&doc("doc-cidp"))).await.unwrap());
        assert!(!service.select_document(Some(&doc("doc-cidp"))).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_document_is_not_found() {
        let (store, _) = seeded_store().await;
        let service = AssistantService::resume(store, replying("ok")).await;

        let err = service
            .select_document(Some(&doc("doc-missing")))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DocumentNotFound);
    }

    /// Holds `converse` until released.
    struct GatedIntelligence {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl CivicIntelligence for GatedIntelligence {
        async fn analyze(&self, _ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError> {
            Err(AIError::unavailable("unused"))
        }

        async fn converse(&self, _request: ConversationRequest) -> Result<String, AIError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok("late reply".to_string())
        }

        async fn enhance_text(&self, _text: &str) -> Result<String, AIError> {
            Err(AIError::unavailable("unused"))
        }

        async fn acknowledge_submission(
            &self,
            _idea: &ProjectIdea,
            _similar_ideas: usize,
        ) -> Result<String, AIError> {
            Err(AIError::unavailable("unused"))
        }
    }

    fn gated() -> Arc<GatedIntelligence> {
        Arc::new(GatedIntelligence {
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    #[tokio::test]
    async fn second_send_while_in_flight_is_busy() {
        let (store, _) = seeded_store().await;
        let ai = gated();
        let service = Arc::new(AssistantService::resume(store, ai.clone()).await);

        let first = tokio::spawn({
            let service = service.clone();
            async move { service.send("first").await }
        });
        ai.entered.notified().await;

        let err = service.send("second").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssistantBusy);

        ai.release.notify_one();
        assert!(matches!(first.await.unwrap().unwrap(), SendOutcome::Replied(_)));
    }

    #[tokio::test]
    async fn reply_arriving_after_regrounding_is_discarded() {
        let (store, _) = seeded_store().await;
        let ai = gated();
        let service = Arc::new(AssistantService::resume(store, ai.clone()).await);

        let pending = tokio::spawn({
            let service = service.clone();
            async move { service.send("question").await }
        });
        ai.entered.notified().await;

        service.select_document(Some(&doc("doc-cidp"))).await.unwrap();
        ai.release.notify_one();

        assert_eq!(pending.await.unwrap().unwrap(), SendOutcome::Discarded);
        assert!(service.view().await.history.is_empty());
    }
}
