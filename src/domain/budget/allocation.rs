//! Citizen budget allocations and the People's Budget average.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

/// Fixed pot of money a citizen distributes, in KES.
pub const TOTAL_BUDGET: i64 = 500_000_000;

/// An amount as it arrives from a slider or text input.
///
/// Text is coerced on read so that sums never degrade into string
/// concatenation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllocationAmount {
    Number(f64),
    Text(String),
}

impl AllocationAmount {
    /// Numeric value. Blank or unparsable text counts as zero.
    pub fn value(&self) -> f64 {
        let value = match self {
            AllocationAmount::Number(n) => *n,
            AllocationAmount::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl From<f64> for AllocationAmount {
    fn from(value: f64) -> Self {
        AllocationAmount::Number(value)
    }
}

impl From<i64> for AllocationAmount {
    fn from(value: i64) -> Self {
        AllocationAmount::Number(value as f64)
    }
}

impl From<&str> for AllocationAmount {
    fn from(value: &str) -> Self {
        AllocationAmount::Text(value.to_string())
    }
}

/// One citizen's split of the budget, topic to amount.
///
/// There is no submitter identity; resubmission is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetAllocation(BTreeMap<String, AllocationAmount>);

impl BudgetAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, topic: impl Into<String>, amount: impl Into<AllocationAmount>) -> Self {
        self.0.insert(topic.into(), amount.into());
        self
    }

    pub fn get(&self, topic: &str) -> Option<f64> {
        self.0.get(topic).map(AllocationAmount::value)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Coerced `(topic, amount)` pairs.
    pub fn amounts(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.value()))
    }

    pub fn total(&self) -> f64 {
        self.amounts().map(|(_, v)| v).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AllocationAmount)> for BudgetAllocation {
    fn from_iter<T: IntoIterator<Item = (String, AllocationAmount)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rejects an allocation whose coerced sum exceeds [`TOTAL_BUDGET`].
///
/// Individual amounts are not bounded; negative and fractional values pass.
pub fn validate_allocation(allocation: &BudgetAllocation) -> Result<(), ValidationError> {
    let allocated = allocation.total();
    if allocated > TOTAL_BUDGET as f64 {
        return Err(ValidationError::BudgetExceeded {
            allocated,
            total: TOTAL_BUDGET,
        });
    }
    Ok(())
}

/// Community average per topic.
pub type PeoplesBudget = BTreeMap<String, f64>;

/// Averages submissions topic by topic.
///
/// Each topic's mean is taken over the submissions that mention it, not
/// over the total number of submissions.
pub fn compute_peoples_budget(submissions: &[BudgetAllocation]) -> PeoplesBudget {
    let mut sums: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
    for submission in submissions {
        for (topic, amount) in submission.amounts() {
            let entry = sums.entry(topic).or_insert((0.0, 0));
            entry.0 += amount;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(topic, (sum, count))| (topic.to_string(), sum / f64::from(count)))
        .collect()
}
