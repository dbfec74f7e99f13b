//! HTTP adapter for idea endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CommentRequest, IdeaListQuery, StatusRequest, SubmitIdeaResponse, TextBody, VoteResponse};
pub use handlers::IdeaHandlers;
pub use routes::idea_routes;
