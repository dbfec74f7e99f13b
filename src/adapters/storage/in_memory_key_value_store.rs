//! In-Memory Key-Value Store Adapter
//!
//! Useful for testing and development. Writes to selected keys can be
//! made to fail to exercise rollback paths.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    failing_keys: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `put` to `key` fail.
    pub async fn fail_writes_to(&self, key: &str) {
        self.failing_keys.write().await.insert(key.to_string());
    }

    pub async fn clear_failures(&self) {
        self.failing_keys.write().await.clear();
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_keys.read().await.contains(key) {
            return Err(StorageError::Io(format!("simulated write failure for {}", key)));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_removes() {
        let store = InMemoryKeyValueStore::new();
        store.put("projectIdeas", "[]").await.unwrap();
        assert_eq!(store.get("projectIdeas").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len().await, 1);

        store.remove("projectIdeas").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn injected_failures_reject_writes() {
        let store = InMemoryKeyValueStore::new();
        store.fail_writes_to("officialProjects").await;

        assert!(store.put("officialProjects", "[]").await.is_err());
        assert!(store.put("projectIdeas", "[]").await.is_ok());

        store.clear_failures().await;
        assert!(store.put("officialProjects", "[]").await.is_ok());
    }
}
