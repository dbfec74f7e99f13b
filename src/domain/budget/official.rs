//! The county's published allocation and the comparison against citizens.

use serde::Serialize;

use super::allocation::{PeoplesBudget, TOTAL_BUDGET};

/// A line of the official budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetLine {
    pub category: &'static str,
    pub amount: i64,
}

/// Reference allocation published by the county. Sums to [`TOTAL_BUDGET`].
pub const OFFICIAL_BUDGET: [BudgetLine; 6] = [
    BudgetLine {
        category: "Healthcare",
        amount: 120_000_000,
    },
    BudgetLine {
        category: "Roads & Infrastructure",
        amount: 110_000_000,
    },
    BudgetLine {
        category: "Water Access",
        amount: 90_000_000,
    },
    BudgetLine {
        category: "Education",
        amount: 80_000_000,
    },
    BudgetLine {
        category: "Economic Empowerment",
        amount: 60_000_000,
    },
    BudgetLine {
        category: "Public Services",
        amount: 40_000_000,
    },
];

pub fn official_categories() -> impl Iterator<Item = &'static str> {
    OFFICIAL_BUDGET.iter().map(|line| line.category)
}

/// One category in the side-by-side view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category: String,
    pub official: Option<i64>,
    pub people: Option<f64>,
}

/// Official amounts next to the People's Budget.
///
/// Official categories come first in published order, followed by any
/// topic citizens funded that the county did not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub total_budget: i64,
    pub submission_count: usize,
    pub rows: Vec<ComparisonRow>,
}

impl BudgetComparison {
    pub fn new(peoples: &PeoplesBudget, submission_count: usize) -> Self {
        let mut rows: Vec<ComparisonRow> = OFFICIAL_BUDGET
            .iter()
            .map(|line| ComparisonRow {
                category: line.category.to_string(),
                official: Some(line.amount),
                people: peoples.get(line.category).copied(),
            })
            .collect();

        rows.extend(
            peoples
                .iter()
                .filter(|(topic, _)| !official_categories().any(|c| c == topic.as_str()))
                .map(|(topic, amount)| ComparisonRow {
                    category: topic.clone(),
                    official: None,
                    people: Some(*amount),
                }),
        );

        Self {
            total_budget: TOTAL_BUDGET,
            submission_count,
            rows,
        }
    }
}
