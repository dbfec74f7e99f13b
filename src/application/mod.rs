//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! All writes go through [`PortalStore`]; AI calls never hold its lock.

pub mod handlers;
mod store;

pub use store::PortalStore;
