//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! shared [`PortalStore`](crate::application::PortalStore).

pub mod analysis;
pub mod assistant;
pub mod budget;
pub mod idea;
pub mod project;

#[cfg(test)]
pub(crate) mod test_support;
