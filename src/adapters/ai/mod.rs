//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini `generateContent` API
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmCivicIntelligence` - CivicIntelligence on top of any AIProvider
//! - `UnconfiguredIntelligence` - Always unavailable; used without an API key

mod gemini_provider;
mod llm_intelligence;
mod mock_provider;
mod unconfigured;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use llm_intelligence::LlmCivicIntelligence;
pub use mock_provider::{MockAIProvider, MockError};
pub use unconfigured::UnconfiguredIntelligence;
