//! Budget queries - the People's Budget, its comparison with the official
//! allocation, and the topics offered in the simulator.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::analysis::AggregationEngine;
use crate::application::PortalStore;
use crate::domain::aggregation::{AnalysisResult, PriorityTopic, SentimentBreakdown};
use crate::domain::budget::{compute_peoples_budget, BudgetComparison, PeoplesBudget, TOTAL_BUDGET};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub total_budget: i64,
    pub submission_count: usize,
    pub peoples_budget: PeoplesBudget,
    pub comparison: BudgetComparison,
}

pub struct GetBudgetOverviewHandler {
    store: Arc<PortalStore>,
}

impl GetBudgetOverviewHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> BudgetOverview {
        let snapshot = self.store.snapshot().await;
        let submissions = &snapshot.budget_submissions;
        let peoples_budget = compute_peoples_budget(submissions);
        debug!(
            submissions = submissions.len(),
            topics = peoples_budget.len(),
            "people's budget computed"
        );
        BudgetOverview {
            total_budget: TOTAL_BUDGET,
            submission_count: submissions.len(),
            comparison: BudgetComparison::new(&peoples_budget, submissions.len()),
            peoples_budget,
        }
    }
}

/// Topics the simulator offers sliders for.
pub struct GetBudgetCandidatesHandler {
    store: Arc<PortalStore>,
    engine: Arc<AggregationEngine>,
}

impl GetBudgetCandidatesHandler {
    pub fn new(store: Arc<PortalStore>, engine: Arc<AggregationEngine>) -> Self {
        Self { store, engine }
    }

    /// Never empty: with no analysable ideas every official category is
    /// offered as a placeholder.
    pub async fn handle(&self) -> Vec<PriorityTopic> {
        let snapshot = self.store.snapshot().await;
        let analysis = self.engine.analyze(snapshot.ideas.iter()).await;
        let candidates = match analysis.result() {
            Some(result) => result.budget_candidates(),
            None => AnalysisResult {
                top_priorities: Vec::new(),
                sentiment: SentimentBreakdown::default(),
            }
            .budget_candidates(),
        };
        debug!(candidates = candidates.len(), "budget candidates ready");
        candidates
    }
}
