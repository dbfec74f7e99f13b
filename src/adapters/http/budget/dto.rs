//! HTTP DTOs for budget endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::budget::AllocationDraft;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub submission_count: usize,
}

/// Raw slider values as typed by the citizen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub amounts: BTreeMap<String, String>,
}

impl DraftRequest {
    pub fn into_draft(self) -> AllocationDraft {
        let mut draft = AllocationDraft::default();
        for (topic, raw) in self.amounts {
            draft.set_amount(topic, &raw);
        }
        draft
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: AllocationDraft,
    pub total_allocated: i64,
    pub remaining: i64,
    pub over_budget: bool,
}

impl From<AllocationDraft> for DraftResponse {
    fn from(draft: AllocationDraft) -> Self {
        Self {
            total_allocated: draft.total_allocated(),
            remaining: draft.remaining(),
            over_budget: draft.is_over_budget(),
            draft,
        }
    }
}
