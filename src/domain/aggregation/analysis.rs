//! Priority and sentiment summary of citizen ideas.

use serde::{Deserialize, Serialize};

use crate::domain::budget::official_categories;
use crate::domain::foundation::ValidationError;
use crate::domain::idea::ProjectIdea;

/// How many priorities feed the budget simulator.
pub const CANDIDATE_LIMIT: usize = 5;

pub const DEFAULT_CANDIDATE_DESCRIPTION: &str = "A key area for county development.";
pub const DEFAULT_CANDIDATE_COST: f64 = 50_000_000.0;

/// What the engine sends about each idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaDigest {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&ProjectIdea> for IdeaDigest {
    fn from(idea: &ProjectIdea) -> Self {
        Self {
            title: idea.title.clone(),
            description: idea.description.clone(),
            location: idea.location.clone(),
            category: idea.category.clone(),
        }
    }
}

/// A cluster of related ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityTopic {
    pub topic: String,
    pub count: u32,
    pub description: String,
    /// Estimated total cost for the whole cluster, in KES.
    pub cost: f64,
}

impl PriorityTopic {
    fn placeholder(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            count: 0,
            description: DEFAULT_CANDIDATE_DESCRIPTION.to_string(),
            cost: DEFAULT_CANDIDATE_COST,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub top_priorities: Vec<PriorityTopic>,
    pub sentiment: SentimentBreakdown,
}

/// Outcome of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum Analysis {
    /// Nothing to analyse.
    NoResult,
    Computed(AnalysisResult),
    /// The collaborator failed or answered off-contract.
    Fallback(AnalysisResult),
}

impl Analysis {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Analysis::NoResult => None,
            Analysis::Computed(r) | Analysis::Fallback(r) => Some(r),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Analysis::Fallback(_))
    }
}

/// Loosely typed mirror used to check a collaborator payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    top_priorities: Vec<RawTopic>,
    sentiment: RawSentiment,
}

#[derive(Deserialize)]
struct RawTopic {
    topic: String,
    count: i64,
    description: String,
    cost: f64,
}

#[derive(Deserialize)]
struct RawSentiment {
    positive: i64,
    neutral: i64,
    negative: i64,
}

fn non_negative(field: &str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .map_err(|_| ValidationError::invalid_format(field, format!("{value} is not a valid count")))
}

impl AnalysisResult {
    /// Validates a collaborator payload against the result contract.
    pub fn from_response(value: serde_json::Value) -> Result<Self, ValidationError> {
        let raw: RawAnalysis = serde_json::from_value(value)
            .map_err(|e| ValidationError::invalid_format("analysis", e.to_string()))?;

        let top_priorities = raw
            .top_priorities
            .into_iter()
            .map(|t| {
                Ok(PriorityTopic {
                    count: non_negative("topPriorities.count", t.count)?,
                    topic: t.topic,
                    description: t.description,
                    cost: t.cost,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            top_priorities,
            sentiment: SentimentBreakdown {
                positive: non_negative("sentiment.positive", raw.sentiment.positive)?,
                neutral: non_negative("sentiment.neutral", raw.sentiment.neutral)?,
                negative: non_negative("sentiment.negative", raw.sentiment.negative)?,
            },
        })
    }

    /// Fixed summary shown when the collaborator cannot be used.
    pub fn fallback() -> Self {
        let topic = |topic: &str, count, description: &str, cost| PriorityTopic {
            topic: topic.to_string(),
            count,
            description: description.to_string(),
            cost,
        };
        Self {
            top_priorities: vec![
                topic(
                    "Water Access",
                    3,
                    "Citizens are requesting new boreholes and wells for clean water.",
                    2_400_000.0,
                ),
                topic(
                    "Roads & Infrastructure",
                    2,
                    "Requests focus on repairing roads and bridges for better transport.",
                    10_000_000.0,
                ),
                topic(
                    "Healthcare",
                    2,
                    "Submissions highlight the need for better hospital facilities and equipment.",
                    6_500_000.0,
                ),
            ],
            sentiment: SentimentBreakdown {
                positive: 4,
                neutral: 6,
                negative: 2,
            },
        }
    }

    /// Topics offered in the budget simulator.
    ///
    /// The first [`CANDIDATE_LIMIT`] priorities. When fewer natural topics
    /// exist, official budget categories not already present are appended
    /// as zero-count placeholders.
    pub fn budget_candidates(&self) -> Vec<PriorityTopic> {
        let mut candidates: Vec<PriorityTopic> = self
            .top_priorities
            .iter()
            .take(CANDIDATE_LIMIT)
            .cloned()
            .collect();

        if self.top_priorities.len() < CANDIDATE_LIMIT {
            for category in official_categories() {
                if !candidates.iter().any(|c| c.topic == category) {
                    candidates.push(PriorityTopic::placeholder(category));
                }
            }
        }
        candidates
    }
}
