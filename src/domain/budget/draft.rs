//! Working slider state before a citizen submits.

use serde::Serialize;
use std::collections::BTreeMap;

use super::allocation::{AllocationAmount, BudgetAllocation, TOTAL_BUDGET};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDraft {
    amounts: BTreeMap<String, i64>,
}

impl AllocationDraft {
    /// Starts every candidate topic at zero.
    pub fn new<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            amounts: topics.into_iter().map(|t| (t.into(), 0)).collect(),
        }
    }

    /// Sets a topic from raw input. Anything that is not an integer is 0.
    pub fn set_amount(&mut self, topic: impl Into<String>, raw: &str) {
        let amount = raw.trim().parse::<i64>().unwrap_or(0);
        self.amounts.insert(topic.into(), amount);
    }

    pub fn amount(&self, topic: &str) -> i64 {
        self.amounts.get(topic).copied().unwrap_or(0)
    }

    /// Sum of every slider, saturating at the `i64` bounds.
    pub fn total_allocated(&self) -> i64 {
        let total: i128 = self.amounts.values().map(|&a| i128::from(a)).sum();
        i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
    }

    pub fn remaining(&self) -> i64 {
        TOTAL_BUDGET.saturating_sub(self.total_allocated())
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_allocated() > TOTAL_BUDGET
    }

    pub fn to_allocation(&self) -> BudgetAllocation {
        self.amounts
            .iter()
            .map(|(topic, amount)| (topic.clone(), AllocationAmount::from(*amount)))
            .collect()
    }
}
