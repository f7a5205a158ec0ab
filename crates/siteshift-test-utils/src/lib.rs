//! Testing utilities for the siteshift workspace
//!
//! Shared fixtures: a small URL checklist and pre-seeded stores.

#![allow(missing_docs)]

use siteshift_model::{Status, TodoItem, TodoMap};
use siteshift_store::{Store, TODOS_KEY};

/// Timestamp used by fixture records
pub const FIXTURE_TIME: i64 = 1_700_000_000_000;

pub fn sample_urls() -> Vec<String> {
    vec![
        "https://zetarmold.com/".to_string(),
        "https://zetarmold.com/about-us/".to_string(),
        "https://zetarmold.com/capabilities/".to_string(),
        "https://zetarmold.com/contact/".to_string(),
        "https://zetarmold.com/news/".to_string(),
    ]
}

pub fn todo(url: &str, status: Status) -> TodoItem {
    TodoItem::new(url, status, FIXTURE_TIME)
}

pub fn todo_map(entries: &[(&str, Status)]) -> TodoMap {
    entries
        .iter()
        .map(|(url, status)| ((*url).to_string(), todo(url, *status)))
        .collect()
}

/// In-memory store pre-seeded with `todos`
pub async fn seeded_store(todos: &TodoMap) -> Store {
    let store = Store::in_memory();
    store
        .set_json(TODOS_KEY, todos)
        .await
        .expect("seeding a memory store cannot fail");
    store
}
