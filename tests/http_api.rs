//! HTTP API tests against the assembled portal router.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so routing, extractors,
//! status mapping and response bodies are all covered without a socket.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use wananchi_portal::adapters::http::portal_router;
use wananchi_portal::adapters::storage::InMemoryKeyValueStore;
use wananchi_portal::application::PortalStore;
use wananchi_portal::domain::aggregation::IdeaDigest;
use wananchi_portal::domain::idea::ProjectIdea;
use wananchi_portal::ports::{AIError, CivicIntelligence, ConversationRequest};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Collaborator that is never reachable.
struct Offline;

#[async_trait]
impl CivicIntelligence for Offline {
    async fn analyze(&self, _ideas: &[IdeaDigest]) -> Result<Value, AIError> {
        Err(AIError::unavailable("offline"))
    }

    async fn converse(&self, _request: ConversationRequest) -> Result<String, AIError> {
        Err(AIError::unavailable("offline"))
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

async fn app() -> Router {
    let kv = InMemoryKeyValueStore::new();
    let store = Arc::new(PortalStore::load(Arc::new(kv)).await.unwrap());
    portal_router(store, Arc::new(Offline)).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_responds() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn ideas_can_be_filtered_by_ward() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/ideas?subCounty=Suba%20North&ward=Mbita",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ideas = body.as_array().unwrap();
    assert!(!ideas.is_empty());
    assert!(ideas.iter().all(|i| i["ward"] == "Mbita"));
}

#[tokio::test]
async fn submit_then_vote_twice() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/ideas",
        Some(json!({
            "title": "Footbridge over Awach river",
            "description": "Children cross the river on foot during rains.",
            "location": "Kendu Bay"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["idea"]["id"].as_str().unwrap().to_string();
    assert!(!body["acknowledgement"].as_str().unwrap().is_empty());

    let uri = format!("/api/ideas/{}/vote", id);
    let (_, first) = send_json(&app, Method::POST, &uri, None).await;
    let (_, second) = send_json(&app, Method::POST, &uri, None).await;
    assert_eq!(first, json!({"outcome": "counted", "votes": 1}));
    assert_eq!(second, json!({"outcome": "alreadyVoted"}));
}

#[tokio::test]
async fn missing_required_field_is_bad_request() {
    let app = app().await;
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/ideas",
        Some(json!({"title": "", "description": "x", "location": "Mbita"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let app = app().await;
    let (status, _) = send_json(&app, Method::GET, "/api/projects/proj-404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_detail_includes_completion() {
    let app = app().await;
    let (status, body) = send_json(&app, Method::GET, "/api/projects/proj-3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "proj-3");
    assert!(body["completionPercentage"].is_number());
}

#[tokio::test]
async fn over_budget_submission_is_rejected() {
    let app = app().await;
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/budget/submissions",
        Some(json!({"Healthcare": 400000000, "Education": "200000000"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, overview) = send_json(&app, Method::GET, "/api/budget", None).await;
    assert_eq!(overview["submissionCount"], 0);
}

#[tokio::test]
async fn budget_submission_is_counted() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/budget/submissions",
        Some(json!({"Healthcare": 100000000, "Water Access": "50000000"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["submissionCount"], 1);

    let (_, overview) = send_json(&app, Method::GET, "/api/budget", None).await;
    assert_eq!(overview["peoplesBudget"]["Water Access"], 50000000.0);
}

#[tokio::test]
async fn draft_with_extreme_amounts_is_over_budget() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/budget/draft",
        Some(json!({"amounts": {"A": "9223372036854775807", "B": "1"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overBudget"], true);
    assert_eq!(body["totalAllocated"], i64::MAX);
}

#[tokio::test]
async fn dashboard_for_empty_ward_has_no_analysis() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/dashboard?subCounty=Rangwe&ward=Kochia",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["kind"], "noResult");
}

#[tokio::test]
async fn dashboard_falls_back_when_collaborator_is_offline() {
    let app = app().await;
    let (_, body) = send_json(&app, Method::GET, "/api/dashboard", None).await;
    assert_eq!(body["analysis"]["kind"], "fallback");
}

#[tokio::test]
async fn ideas_export_is_csv_attachment() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/export/ideas.csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("project_ideas.csv"));
}

#[tokio::test]
async fn assistant_grounding_on_unknown_document_is_not_found() {
    let app = app().await;
    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/assistant/grounding",
        Some(json!({"documentId": "doc-missing"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_assistant_message_is_ignored() {
    let app = app().await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/assistant/messages",
        Some(json!({"text": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "ignored");

    let (_, view) = send_json(&app, Method::GET, "/api/assistant", None).await;
    assert_eq!(view["history"], json!([]));
}
