//! AggregationEngine - turns citizen ideas into ranked priorities.
//!
//! The collaborator does the clustering. The engine builds the digest,
//! validates what comes back and substitutes the fixed fallback whenever
//! the collaborator fails or answers off-contract.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::aggregation::{Analysis, AnalysisResult, IdeaDigest};
use crate::domain::idea::ProjectIdea;
use crate::ports::CivicIntelligence;

pub struct AggregationEngine {
    intelligence: Arc<dyn CivicIntelligence>,
}

impl AggregationEngine {
    pub fn new(intelligence: Arc<dyn CivicIntelligence>) -> Self {
        Self { intelligence }
    }

    /// An empty input yields [`Analysis::NoResult`] without a collaborator
    /// call.
    pub async fn analyze<'a, I>(&self, ideas: I) -> Analysis
    where
        I: IntoIterator<Item = &'a ProjectIdea>,
    {
        let digests: Vec<IdeaDigest> = ideas.into_iter().map(IdeaDigest::from).collect();
        if digests.is_empty() {
            debug!("no ideas to analyse");
            return Analysis::NoResult;
        }

        let payload = match self.intelligence.analyze(&digests).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, ideas = digests.len(), "analysis unavailable, using fallback");
                return Analysis::Fallback(AnalysisResult::fallback());
            }
        };

        match AnalysisResult::from_response(payload) {
            Ok(result) => {
                info!(
                    ideas = digests.len(),
                    topics = result.top_priorities.len(),
                    "ideas analysed"
                );
                Analysis::Computed(result)
            }
            Err(e) => {
                warn!(error = %e, "analysis payload rejected, using fallback");
                Analysis::Fallback(AnalysisResult::fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::FakeIntelligence;
    use crate::domain::seed;
    use serde_json::json;

    #[tokio::test]
    async fn empty_input_skips_collaborator() {
        let ai = Arc::new(FakeIntelligence::unreachable());
        let engine = AggregationEngine::new(ai.clone());

        let none: Vec<ProjectIdea> = Vec::new();
        let analysis = engine.analyze(&none).await;

        assert_eq!(analysis, Analysis::NoResult);
        assert_eq!(ai.analyze_calls(), 0);
    }

    #[tokio::test]
    async fn unreachable_collaborator_falls_back() {
        let engine = AggregationEngine::new(Arc::new(FakeIntelligence::unreachable()));
        let ideas = seed::project_ideas();

        let analysis = engine.analyze(&ideas).await;
        assert_eq!(analysis, Analysis::Fallback(AnalysisResult::fallback()));
    }

    #[tokio::test]
    async fn conforming_payload_is_computed() {
        let ai = FakeIntelligence {
            analysis: Some(json!({
                "topPriorities": [
                    {"topic": "Water Access", "count": 4, "description": "Boreholes", "cost": 3000000}
                ],
                "sentiment": {"positive": 5, "neutral": 4, "negative": 3}
            })),
            ..Default::default()
        };
        let engine = AggregationEngine::new(Arc::new(ai));
        let ideas = seed::project_ideas();

        let analysis = engine.analyze(&ideas).await;
        let result = analysis.result().unwrap();
        assert!(!analysis.is_fallback());
        assert_eq!(result.top_priorities[0].count, 4);
    }

    #[tokio::test]
    async fn off_contract_payload_falls_back() {
        let ai = FakeIntelligence {
            analysis: Some(json!({"topPriorities": [{"topic": "Water"}]})),
            ..Default::default()
        };
        let engine = AggregationEngine::new(Arc::new(ai));
        let ideas = seed::project_ideas();

        assert!(engine.analyze(&ideas).await.is_fallback());
    }
}
