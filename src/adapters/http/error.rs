//! HTTP error responses.
//!
//! Maps [`DomainError`] codes onto status codes with a uniform JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Wrapper so handlers can return `Result<_, ApiError>`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::BudgetExceeded => StatusCode::BAD_REQUEST,
        ErrorCode::IdeaNotFound
        | ErrorCode::ProjectNotFound
        | ErrorCode::ForumPostNotFound
        | ErrorCode::DocumentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AssistantBusy => StatusCode::CONFLICT,
        ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);
        if status.is_server_error() {
            error!(code = %self.0.code, message = %self.0.message, "request failed");
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Rejects a malformed path id before it reaches a handler.
pub fn bad_id(kind: &str, raw: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID: {}", kind, raw))),
    )
        .into_response()
}
