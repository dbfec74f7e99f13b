//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter (dto / handlers / routes);
//! [`portal_router`] assembles them.

pub mod assistant;
pub mod budget;
pub mod dashboard;
mod error;
pub mod ideas;
pub mod projects;
mod router;

pub use error::{status_for, ApiError, ErrorResponse};
pub use router::portal_router;
