//! Checklist backend abstraction
//!
//! The application state talks to the shared list through this seam. Two
//! implementations exist: [`LocalBackend`] here, operating directly on a
//! [`Store`], and [`crate::HttpBackend`] going through the server. Both
//! exchange the whole map per call; there are no partial updates.

use crate::error::ClientError;
use async_trait::async_trait;
use siteshift_model::{TodoMap, UrlSettings};
use siteshift_store::{Store, SETTINGS_KEY, TODOS_KEY};

/// Transport seam between the application state and the shared list
#[async_trait]
pub trait ChecklistBackend: Send + Sync {
    /// Fetch the shared todo map, empty if nothing is stored yet
    async fn get_todos(&self) -> Result<TodoMap, ClientError>;

    /// Replace the shared todo map wholesale
    async fn put_todos(&self, todos: &TodoMap) -> Result<(), ClientError>;

    /// Fetch the shared settings, defaults if nothing is stored yet
    async fn get_settings(&self) -> Result<UrlSettings, ClientError>;

    /// Replace the shared settings
    async fn put_settings(&self, settings: &UrlSettings) -> Result<(), ClientError>;
}

/// Backend operating on a store in-process
///
/// Single-user runs point this at a [`siteshift_store::JsonFileStore`];
/// tests point it at a memory store. Semantics mirror the server handlers:
/// missing keys read as the same defaults the server would answer with.
pub struct LocalBackend {
    store: Store,
}

impl LocalBackend {
    /// Create a backend over `store`
    #[inline]
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChecklistBackend for LocalBackend {
    async fn get_todos(&self) -> Result<TodoMap, ClientError> {
        Ok(self.store.get_json(TODOS_KEY).await?.unwrap_or_default())
    }

    async fn put_todos(&self, todos: &TodoMap) -> Result<(), ClientError> {
        Ok(self.store.set_json(TODOS_KEY, todos).await?)
    }

    async fn get_settings(&self) -> Result<UrlSettings, ClientError> {
        Ok(self.store.get_json(SETTINGS_KEY).await?.unwrap_or_default())
    }

    async fn put_settings(&self, settings: &UrlSettings) -> Result<(), ClientError> {
        Ok(self.store.set_json(SETTINGS_KEY, settings).await?)
    }
}
