//! HTTP DTOs for idea endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::idea::SubmitIdeaResult;
use crate::domain::idea::{IdeaStatus, ProjectIdea};
use crate::domain::store::VoteOutcome;

/// Query parameters for listing ideas.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaListQuery {
    pub sub_county: Option<String>,
    pub ward: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIdeaResponse {
    pub idea: ProjectIdea,
    pub similar_ideas: usize,
    pub acknowledgement: String,
}

impl From<SubmitIdeaResult> for SubmitIdeaResponse {
    fn from(result: SubmitIdeaResult) -> Self {
        Self {
            idea: result.idea,
            similar_ideas: result.similar_ideas,
            acknowledgement: result.acknowledgement,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    #[serde(default = "anonymous")]
    pub author: String,
    pub text: String,
}

fn anonymous() -> String {
    "Anonymous".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRequest {
    pub status: IdeaStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextBody {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    /// `counted`, `alreadyVoted` or `unknownIdea`.
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        match outcome {
            VoteOutcome::Counted { votes } => Self {
                outcome: "counted",
                votes: Some(votes),
            },
            VoteOutcome::AlreadyVoted => Self {
                outcome: "alreadyVoted",
                votes: None,
            },
            VoteOutcome::UnknownIdea => Self {
                outcome: "unknownIdea",
                votes: None,
            },
        }
    }
}
