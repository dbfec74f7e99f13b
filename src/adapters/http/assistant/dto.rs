//! HTTP DTOs for assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DocumentId;

/// `null` or missing ungrounds the assistant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingRequest {
    #[serde(default)]
    pub document_id: Option<DocumentId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroundingResponse {
    pub changed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}
