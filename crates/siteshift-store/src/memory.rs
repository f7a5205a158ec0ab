//! In-memory store backend

use crate::{KeyValueStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

/// Process-local store, lost on shutdown
///
/// Used by tests and by server runs that do not pass a data file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get() {
        let store = MemoryStore::new();
        store.set("todos", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("todos").await.unwrap(), Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("todos", json!({"a": 1})).await.unwrap();
        store.set("todos", json!({"b": 2})).await.unwrap();
        assert_eq!(store.get("todos").await.unwrap(), Some(json!({"b": 2})));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = MemoryStore::new();
        store.set("todos", json!({})).await.unwrap();
        assert_eq!(store.get("settings").await.unwrap(), None);
    }
}
