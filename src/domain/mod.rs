//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors)
//! - `idea` - Citizen project ideas and their comments
//! - `project` - Official projects, progress reports and forums
//! - `budget` - Budget simulator: allocations, People's Budget, official budget
//! - `aggregation` - Priority analysis contract and dashboard filtering
//! - `assistant` - Conversational assistant session and grounding
//! - `concierge` - Acknowledgement for fresh submissions
//! - `store` - Copy-on-write portal snapshot
//! - `locations` - County sub-counties and wards
//! - `seed` - Initial dataset and reference documents

pub mod aggregation;
pub mod assistant;
pub mod budget;
pub mod concierge;
pub mod foundation;
pub mod idea;
pub mod locations;
pub mod project;
pub mod seed;
pub mod store;
