//! Scripted AI provider for tests.
//!
//! Replies are consumed front to back; once the script runs out every call
//! answers with an empty JSON object. Each request is recorded so tests can
//! inspect the prompt the civic intelligence adapter built.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
};

const MOCK_MODEL: &str = "mock-civic-1";

/// Failures the mock can be scripted to produce.
#[derive(Debug, Clone)]
pub enum MockError {
    Unavailable { message: String },
    RateLimited { retry_after_secs: u32 },
    Network { message: String },
    Blocked { reason: String },
    AuthenticationFailed,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Network { message } => AIError::network(message),
            MockError::Blocked { reason } => AIError::content_filtered(reason),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
        }
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(MockError),
}

#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.script).push_back(Scripted::Reply(content.into()));
        self
    }

    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.script).push_back(Scripted::Fail(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.requests).push(request);

        let next = lock(&self.script).pop_front();
        match next {
            Some(Scripted::Fail(err)) => Err(err.into()),
            Some(Scripted::Reply(content)) => Ok(CompletionResponse {
                content,
                model: MOCK_MODEL.to_string(),
                finish_reason: FinishReason::Stop,
            }),
            None => Ok(CompletionResponse {
                content: "{}".to_string(),
                model: MOCK_MODEL.to_string(),
                finish_reason: FinishReason::Stop,
            }),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}
