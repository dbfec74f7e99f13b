//! Conversational assistant handlers.

mod assistant_service;

pub use assistant_service::{AssistantService, AssistantView, SendOutcome};
