//! End-to-end flows through the application handlers over in-memory storage.
//!
//! These tests exercise the public crate surface the HTTP layer is built on:
//! 1. Idea submission, voting and conversion commit atomically
//! 2. Aggregation distinguishes "nothing to analyse" from a fallback
//! 3. The assistant clears its transcript when the grounding changes
//! 4. Every committed collection survives a reload

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use wananchi_portal::adapters::storage::InMemoryKeyValueStore;
use wananchi_portal::application::handlers::analysis::{AggregationEngine, GetDashboardHandler, GetDashboardQuery};
use wananchi_portal::application::handlers::assistant::{AssistantService, SendOutcome};
use wananchi_portal::application::handlers::budget::{
    GetBudgetOverviewHandler, SubmitAllocationCommand, SubmitAllocationHandler,
};
use wananchi_portal::application::handlers::idea::{
    ConvertIdeaCommand, ConvertIdeaHandler, SubmitIdeaCommand, SubmitIdeaHandler,
    VoteIdeaCommand, VoteIdeaHandler,
};
use wananchi_portal::application::PortalStore;
use wananchi_portal::domain::aggregation::{Analysis, IdeaDigest, LocationFilter};
use wananchi_portal::domain::assistant::{ChatRole, CONNECTION_FAILURE_REPLY};
use wananchi_portal::domain::budget::{BudgetAllocation, TOTAL_BUDGET};
use wananchi_portal::domain::foundation::{DocumentId, ErrorCode, IdeaId};
use wananchi_portal::domain::idea::{IdeaStatus, NewIdea, ProjectIdea};
use wananchi_portal::domain::store::VoteOutcome;
use wananchi_portal::ports::{AIError, CivicIntelligence, ConversationRequest, KeyValueStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Scripted collaborator; `None` answers fail as unavailable.
#[derive(Default)]
struct ScriptedIntelligence {
    analysis: Option<serde_json::Value>,
    reply: Option<String>,
    requests: Mutex<Vec<ConversationRequest>>,
}

impl ScriptedIntelligence {
    fn offline() -> Self {
        Self::default()
    }

    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    fn analysing(payload: serde_json::Value) -> Self {
        Self {
            analysis: Some(payload),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CivicIntelligence for ScriptedIntelligence {
    async fn analyze(&self, _ideas: &[IdeaDigest]) -> Result<serde_json::Value, AIError> {
        self.analysis
            .clone()
            .ok_or_else(|| AIError::unavailable("offline"))
    }

    async fn converse(&self, request: ConversationRequest) -> Result<String, AIError> {
        self.requests.lock().unwrap().push(request);
        self.reply
            .clone()
            .ok_or_else(|| AIError::unavailable("offline"))
    }

    async fn enhance_text(&self, _text: &str) -> Result<String, AIError> {
        Err(AIError::unavailable("offline"))
    }

    async fn acknowledge_submission(
        &self,
        _idea: &ProjectIdea,
        _similar_ideas: usize,
    ) -> Result<String, AIError> {
        Err(AIError::unavailable("offline"))
    }
}

async fn open(kv: &InMemoryKeyValueStore) -> Arc<PortalStore> {
    Arc::new(PortalStore::load(Arc::new(kv.clone())).await.unwrap())
}

fn seed_idea() -> IdeaId {
    IdeaId::new("idea-1").unwrap()
}

// =============================================================================
// Ideas
// =============================================================================

#[tokio::test]
async fn submitted_idea_starts_pending_and_falls_back_to_template_acknowledgement() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let handler = SubmitIdeaHandler::new(store.clone(), Arc::new(ScriptedIntelligence::offline()));

    let result = handler
        .handle(SubmitIdeaCommand {
            idea: NewIdea::new("Solar street lights", "Lights for Homa Bay Town", "Homa Bay")
                .in_ward("Homa Bay Town", "Homa Bay Central"),
        })
        .await
        .unwrap();

    assert_eq!(result.idea.status, IdeaStatus::Pending);
    assert_eq!(result.idea.votes, 0);
    assert!(!result.acknowledgement.trim().is_empty());

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.ideas[0].id, result.idea.id);
    assert!(kv.get("projectIdeas").await.unwrap().is_some());
}

#[tokio::test]
async fn blank_title_is_rejected_without_writing() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let handler = SubmitIdeaHandler::new(store, Arc::new(ScriptedIntelligence::offline()));

    let err = handler
        .handle(SubmitIdeaCommand {
            idea: NewIdea::new("   ", "Something", "Mbita"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(kv.is_empty().await);
}

#[tokio::test]
async fn each_idea_takes_one_vote_per_store() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let handler = VoteIdeaHandler::new(store.clone());

    let first = handler
        .handle(VoteIdeaCommand { idea_id: seed_idea() })
        .await
        .unwrap();
    assert_eq!(first, VoteOutcome::Counted { votes: 1 });

    let reopened = VoteIdeaHandler::new(open(&kv).await);
    let again = reopened
        .handle(VoteIdeaCommand { idea_id: seed_idea() })
        .await
        .unwrap();
    assert_eq!(again, VoteOutcome::AlreadyVoted);
}

#[tokio::test]
async fn conversion_commits_idea_and_project_together() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let projects_before = store.snapshot().await.projects.len();
    let handler = ConvertIdeaHandler::new(store.clone());

    let project = handler
        .handle(ConvertIdeaCommand { idea_id: seed_idea() })
        .await
        .unwrap();

    let reloaded = open(&kv).await.snapshot().await;
    assert_eq!(reloaded.projects.len(), projects_before + 1);
    assert!(reloaded.project(&project.id).is_some());
    assert_eq!(reloaded.idea(&seed_idea()).unwrap().status, IdeaStatus::Converted);
}

#[tokio::test]
async fn failed_project_write_leaves_idea_unconverted() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let handler = ConvertIdeaHandler::new(store.clone());

    kv.fail_writes_to("officialProjects").await;
    let err = handler
        .handle(ConvertIdeaCommand { idea_id: seed_idea() })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);

    kv.clear_failures().await;
    let reloaded = open(&kv).await.snapshot().await;
    assert_ne!(reloaded.idea(&seed_idea()).unwrap().status, IdeaStatus::Converted);
    assert_eq!(
        reloaded.projects.len(),
        store.snapshot().await.projects.len()
    );
}

// =============================================================================
// Aggregation
// =============================================================================

#[tokio::test]
async fn empty_selection_yields_no_result_not_fallback() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let engine = Arc::new(AggregationEngine::new(Arc::new(ScriptedIntelligence::offline())));
    let handler = GetDashboardHandler::new(store, engine);

    let view = handler
        .handle(GetDashboardQuery {
            filter: LocationFilter::sub_county("Rangwe").ward("Kochia"),
            search: String::new(),
        })
        .await;

    assert!(view.ideas.is_empty());
    assert_eq!(view.analysis, Analysis::NoResult);
}

#[tokio::test]
async fn unreachable_collaborator_yields_fallback() {
    let engine = AggregationEngine::new(Arc::new(ScriptedIntelligence::offline()));
    let ideas = wananchi_portal::domain::seed::project_ideas();

    let analysis = engine.analyze(&ideas).await;
    assert!(analysis.is_fallback());
}

#[tokio::test]
async fn valid_payload_is_computed() {
    let engine = AggregationEngine::new(Arc::new(ScriptedIntelligence::analysing(json!({
        "topPriorities": [
            {"topic": "Water Access", "count": 4, "description": "Boreholes", "cost": 3000000.0}
        ],
        "sentiment": {"positive": 5, "neutral": 3, "negative": 1}
    }))));
    let ideas = wananchi_portal::domain::seed::project_ideas();

    let Analysis::Computed(result) = engine.analyze(&ideas).await else {
        panic!("expected computed analysis");
    };
    assert_eq!(result.top_priorities[0].topic, "Water Access");
    assert_eq!(result.sentiment.positive, 5);
}

// =============================================================================
// Budget
// =============================================================================

#[tokio::test]
async fn over_budget_allocation_is_rejected_and_average_is_unchanged() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let submit = SubmitAllocationHandler::new(store.clone());
    let overview = GetBudgetOverviewHandler::new(store.clone());

    submit
        .handle(SubmitAllocationCommand {
            allocation: BudgetAllocation::new().with("Healthcare", 100_000_000_i64),
        })
        .await
        .unwrap();
    let err = submit
        .handle(SubmitAllocationCommand {
            allocation: BudgetAllocation::new()
                .with("Healthcare", TOTAL_BUDGET)
                .with("Education", "1"),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BudgetExceeded);

    let view = overview.handle().await;
    assert_eq!(view.submission_count, 1);
    assert_eq!(view.peoples_budget.get("Healthcare"), Some(&100_000_000.0));
}

// =============================================================================
// Assistant
// =============================================================================

#[tokio::test]
async fn regrounding_clears_stored_transcript_and_ungrounded_history_persists() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let intelligence = Arc::new(ScriptedIntelligence::replying("Karibu!"));
    let service = AssistantService::resume(store.clone(), intelligence.clone()).await;

    let outcome = service.send("Habari").await.unwrap();
    assert!(matches!(outcome, SendOutcome::Replied(ref m) if m.text == "Karibu!"));
    assert_eq!(service.view().await.history.len(), 2);

    let document = DocumentId::new("doc-cidp").unwrap();
    assert!(service.select_document(Some(&document)).await.unwrap());
    assert!(service.view().await.history.is_empty());

    service.send("What is the CIDP?").await.unwrap();
    let requests = intelligence.requests.lock().unwrap().clone();
    assert!(requests[1].history.is_empty());

    let resumed = AssistantService::resume(open(&kv).await, intelligence.clone()).await;
    assert!(resumed.view().await.history.is_empty());

    assert!(!resumed.select_document(None).await.unwrap());
    resumed.send("Habari tena").await.unwrap();
    let reopened = AssistantService::resume(open(&kv).await, intelligence.clone()).await;
    let history = reopened.view().await.history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].text, "Habari tena");
}

#[tokio::test]
async fn failed_reply_becomes_connection_message() {
    let kv = InMemoryKeyValueStore::new();
    let store = open(&kv).await;
    let service = AssistantService::resume(store, Arc::new(ScriptedIntelligence::offline())).await;

    let SendOutcome::Replied(message) = service.send("Hello").await.unwrap() else {
        panic!("expected a reply");
    };
    assert_eq!(message.role, ChatRole::Model);
    assert_eq!(message.text, CONNECTION_FAILURE_REPLY);
}

#[tokio::test]
async fn unknown_document_is_not_found() {
    let kv = InMemoryKeyValueStore::new();
    let service =
        AssistantService::resume(open(&kv).await, Arc::new(ScriptedIntelligence::offline())).await;

    let err = service
        .select_document(Some(&DocumentId::new("doc-missing").unwrap()))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DocumentNotFound);
}
