//! Key-value storage adapters.
//!
//! - `FileKeyValueStore` - one JSON file per key on local disk
//! - `InMemoryKeyValueStore` - process-local map for tests and development

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
