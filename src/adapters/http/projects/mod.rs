//! HTTP adapter for official project endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProjectListQuery, ReplyRequest};
pub use handlers::ProjectHandlers;
pub use routes::project_routes;
