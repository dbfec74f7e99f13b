//! Aggregation of citizen ideas into priorities for the dashboard and the
//! budget simulator.
//!
//! Clustering itself is delegated to the AI collaborator; this module
//! defines the request digest, the result contract and its validation,
//! the deterministic fallback, and location filtering.

mod analysis;
mod filter;

pub use analysis::{
    Analysis, AnalysisResult, IdeaDigest, PriorityTopic, SentimentBreakdown, CANDIDATE_LIMIT,
    DEFAULT_CANDIDATE_COST, DEFAULT_CANDIDATE_DESCRIPTION,
};
pub use filter::{filter_ideas, filter_projects, ongoing_projects, LocationFilter, ALL};
