//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Raw LLM completion backend
//! - `CivicIntelligence` - The AI collaborator used by the portal core
//! - `KeyValueStore` - Whole-collection JSON persistence

mod ai_provider;
mod civic_intelligence;
mod key_value_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo,
};
pub use civic_intelligence::{CivicIntelligence, ConversationRequest};
pub use key_value_store::{KeyValueStore, StorageError};
