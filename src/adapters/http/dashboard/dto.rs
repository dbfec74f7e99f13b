//! HTTP DTOs for dashboard and reference endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assistant::CountyDocument;
use crate::domain::foundation::DocumentId;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    pub sub_county: Option<String>,
    pub ward: Option<String>,
    #[serde(default)]
    pub search: String,
}

/// Document listing without the full text.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
}

impl From<&CountyDocument> for DocumentSummary {
    fn from(doc: &CountyDocument) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
        }
    }
}
