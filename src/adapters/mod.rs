//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the portal to external systems:
//! - `ai` - LLM providers and the civic intelligence built on them
//! - `storage` - Key-value stores for portal collections
//! - `export` - CSV rendering of ideas and projects
//! - `http` - REST API (axum)

pub mod ai;
pub mod export;
pub mod http;
pub mod storage;
