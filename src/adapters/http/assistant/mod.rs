//! HTTP adapter for the conversational assistant.

mod dto;
mod handlers;
mod routes;

pub use dto::{GroundingRequest, GroundingResponse, MessageRequest};
pub use handlers::AssistantHandlers;
pub use routes::assistant_routes;
