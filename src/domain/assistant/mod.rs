//! Conversational assistant, optionally grounded on a county document.

mod grounding;
mod message;
mod session;

pub use grounding::{CountyDocument, Grounding, REFUSAL_PHRASE};
pub use message::{ChatMessage, ChatRole};
pub use session::{
    AssistantError, AssistantSession, ConversationHandle, PendingTurn, TurnOutcome,
    CONNECTION_FAILURE_REPLY,
};
