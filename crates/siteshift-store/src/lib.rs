//! Key-value persistence for the siteshift checklist
//!
//! The whole system stores exactly two documents: the todo map and the
//! settings pair. Both are written wholesale on every edit, so the store
//! surface is a plain per-key get/set with no transactions, no versioning
//! and no cross-key coordination. Concurrent writers resolve by last write
//! wins.
//!
//! Backends:
//! - [`MemoryStore`] for tests and ephemeral runs
//! - [`JsonFileStore`] for a single JSON document on disk

#![warn(unreachable_pub)]

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Key under which the todo map is stored
pub const TODOS_KEY: &str = "todos";

/// Key under which the settings pair is stored
pub const SETTINGS_KEY: &str = "settings";

/// Store failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file or filesystem failure
    #[error("store io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded
    #[error("store value is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    /// The on-disk document exists but is not a JSON object
    #[error("store document is not a json object")]
    InvalidDocument,
}

/// Per-key get/set over JSON values
///
/// Object-safe so backends can be swapped behind `Arc<dyn KeyValueStore>`.
/// Each `get`/`set` is atomic for its key; nothing coordinates across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Typed facade over a shared key-value backend
#[derive(Clone)]
pub struct Store {
    inner: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Wrap an existing backend
    #[inline]
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Fresh in-memory store
    #[inline]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Fetch and deserialize the value under `key`
    ///
    /// # Errors
    /// - `StoreError::Json` if a stored value does not match `T`
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.inner.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value` under `key`
    pub async fn set_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        self.inner.set(key, serde_json::to_value(value)?).await
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
