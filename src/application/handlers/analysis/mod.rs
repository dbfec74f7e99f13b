//! Idea aggregation and dashboard queries.

mod aggregation_engine;
mod get_dashboard;

pub use aggregation_engine::AggregationEngine;
pub use get_dashboard::{DashboardView, GetDashboardHandler, GetDashboardQuery};
