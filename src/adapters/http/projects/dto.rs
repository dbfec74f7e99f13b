//! HTTP DTOs for project endpoints.

use serde::Deserialize;

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    pub sub_county: Option<String>,
    pub ward: Option<String>,
    /// Matched against name and description.
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRequest {
    #[serde(default = "anonymous")]
    pub author: String,
    pub text: String,
}

fn anonymous() -> String {
    "Anonymous".to_string()
}
