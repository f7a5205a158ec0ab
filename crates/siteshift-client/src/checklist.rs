//! Application state for the checklist
//!
//! [`Checklist`] replaces ambient UI-store state with an explicit object:
//! it is injected with a backend, loaded once, and mutated through methods
//! that each replace one map entry, push the whole map to the backend and
//! commit to memory only after the write succeeds. A failed write leaves
//! the in-memory copy untouched so the user can simply retry.

use crate::backend::ChecklistBackend;
use crate::error::ClientError;
use crate::now_millis;
use siteshift_model::{
    aggregate_progress, needs_redirect, Status, StatusSlice, TodoItem, TodoMap, UrlSettings,
};
use std::sync::Arc;

/// In-memory copy of the shared list plus its backend
pub struct Checklist {
    backend: Arc<dyn ChecklistBackend>,
    todos: TodoMap,
    settings: UrlSettings,
}

impl Checklist {
    /// Create an empty checklist over `backend`; call [`load`](Self::load)
    /// before reading from it
    #[must_use]
    pub fn new(backend: Arc<dyn ChecklistBackend>) -> Self {
        Self {
            backend,
            todos: TodoMap::new(),
            settings: UrlSettings::default(),
        }
    }

    /// Current todo map
    #[inline]
    #[must_use]
    pub fn todos(&self) -> &TodoMap {
        &self.todos
    }

    /// Current settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &UrlSettings {
        &self.settings
    }

    /// Fetch todos and settings together and replace the in-memory state
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let (todos, settings) =
            tokio::try_join!(self.backend.get_todos(), self.backend.get_settings())?;
        self.todos = todos;
        self.settings = settings;
        Ok(())
    }

    /// Render-time view of one URL: the stored record, or a fresh pending
    /// record when the map has none. The returned item always carries the
    /// asked-for URL even if the stored record left its `url` field empty.
    #[must_use]
    pub fn entry_for(&self, url: &str) -> TodoItem {
        match self.todos.get(url) {
            Some(stored) => {
                let mut item = stored.clone();
                item.url = url.to_string();
                item
            }
            None => TodoItem::new(url, Status::Pending, now_millis()),
        }
    }

    /// Set the status of `url`, stamping `user_id` as assignee exactly when
    /// the new status is in-progress. Other transitions leave the assignee
    /// as previously stored.
    pub async fn update_status(
        &mut self,
        url: &str,
        status: Status,
        user_id: &str,
    ) -> Result<(), ClientError> {
        let now = now_millis();
        let mut next = self.todos.clone();

        let mut item = next
            .get(url)
            .cloned()
            .unwrap_or_else(|| TodoItem::new(url, Status::Pending, now));
        item.url = url.to_string();
        item.status = status;
        if status == Status::InProgress {
            item.assignee = Some(user_id.to_string());
        }
        item.updated_at = now;
        next.insert(url.to_string(), item);

        self.backend.put_todos(&next).await?;
        self.todos = next;
        Ok(())
    }

    /// Record the replacement URL for `original_url` and flag whether the
    /// rename requires a redirect. Both fields are written together; the
    /// status is left alone.
    pub async fn set_migrated_url(
        &mut self,
        original_url: &str,
        migrated_url: &str,
    ) -> Result<(), ClientError> {
        let now = now_millis();
        let needs_301 = needs_redirect(original_url, migrated_url);
        let mut next = self.todos.clone();

        let mut item = next
            .get(original_url)
            .cloned()
            .unwrap_or_else(|| TodoItem::placeholder(now));
        item.migrated_url = Some(migrated_url.to_string());
        item.needs_301 = Some(needs_301);
        item.updated_at = now;
        next.insert(original_url.to_string(), item);

        self.backend.put_todos(&next).await?;
        self.todos = next;
        Ok(())
    }

    /// Replace the shared settings
    pub async fn update_settings(&mut self, settings: UrlSettings) -> Result<(), ClientError> {
        self.backend.put_settings(&settings).await?;
        self.settings = settings;
        Ok(())
    }

    /// Aggregate progress over a fixed checklist of `total` URLs
    #[must_use]
    pub fn progress(&self, total: usize) -> [StatusSlice; 4] {
        aggregate_progress(&self.todos, total)
    }
}

impl std::fmt::Debug for Checklist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checklist")
            .field("todos", &self.todos.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
