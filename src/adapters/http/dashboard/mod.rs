//! HTTP adapter for the public dashboard, exports and reference data.

mod dto;
mod handlers;
mod routes;

pub use dto::{DashboardParams, DocumentSummary};
pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
