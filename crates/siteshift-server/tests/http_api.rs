//! HTTP API tests against a real listening server
//!
//! Each test binds an ephemeral port, serves the router over a fresh
//! store and talks to it with a plain HTTP client or through the client
//! crate's backend.

use async_trait::async_trait;
use serde_json::{json, Value};
use siteshift_client::{Checklist, HttpBackend};
use siteshift_model::{Status, UrlSettings};
use siteshift_server::{router, AppState};
use siteshift_store::{JsonFileStore, KeyValueStore, Store, StoreError};
use siteshift_test_utils::{seeded_store, todo_map};
use std::sync::Arc;

const ABOUT: &str = "https://zetarmold.com/about-us/";

async fn spawn(store: Store) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(store));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_healthz_answers_ok() {
    let base = spawn(Store::in_memory()).await;
    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_unset_todos_read_as_empty_map() {
    let base = spawn(Store::in_memory()).await;
    let response = reqwest::get(format!("{base}/todos")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_put_todos_echoes_and_persists() {
    let base = spawn(Store::in_memory()).await;
    let todos = todo_map(&[(ABOUT, Status::Completed)]);
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/todos"))
        .json(&todos)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let echoed: Value = response.json().await.unwrap();
    let fetched: Value = reqwest::get(format!("{base}/todos"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(echoed, fetched);
    assert_eq!(fetched[ABOUT]["status"], json!("completed"));
}

#[tokio::test]
async fn test_unset_settings_read_as_hardcoded_defaults() {
    let base = spawn(Store::in_memory()).await;
    let settings: UrlSettings = reqwest::get(format!("{base}/settings"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(settings, UrlSettings::default());
}

#[tokio::test]
async fn test_put_settings_round_trips() {
    let base = spawn(Store::in_memory()).await;
    let client = reqwest::Client::new();
    let settings = UrlSettings {
        source: "https://old.example".to_string(),
        target: "https://new.example".to_string(),
    };

    let response = client
        .put(format!("{base}/settings"))
        .json(&settings)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let fetched: UrlSettings = reqwest::get(format!("{base}/settings"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, settings);
}

#[tokio::test]
async fn test_malformed_body_maps_to_500_error_payload() {
    let base = spawn(Store::in_memory()).await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/todos"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to update todos"}));
}

struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::InvalidDocument)
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(StoreError::InvalidDocument)
    }
}

#[tokio::test]
async fn test_store_failures_map_to_500_error_payloads() {
    let base = spawn(Store::new(Arc::new(FailingStore))).await;
    let client = reqwest::Client::new();

    let response = reqwest::get(format!("{base}/todos")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to get todos"}));

    let response = reqwest::get(format!("{base}/settings")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to get settings"}));

    let response = client
        .put(format!("{base}/settings"))
        .json(&UrlSettings::default())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to update settings"}));
}

#[tokio::test]
async fn test_checklist_flows_over_real_http() {
    let base = spawn(Store::in_memory()).await;

    let mut editor = Checklist::new(Arc::new(HttpBackend::new(base.clone())));
    editor.load().await.unwrap();
    editor
        .update_status(ABOUT, Status::InProgress, "uid-1")
        .await
        .unwrap();
    editor
        .update_status(ABOUT, Status::Completed, "uid-2")
        .await
        .unwrap();
    editor
        .set_migrated_url(ABOUT, "https://google.com/who-we-are")
        .await
        .unwrap();

    let mut reader = Checklist::new(Arc::new(HttpBackend::new(base)));
    reader.load().await.unwrap();
    let item = &reader.todos()[ABOUT];
    assert_eq!(item.status, Status::Completed);
    assert_eq!(item.assignee.as_deref(), Some("uid-1"));
    assert_eq!(item.needs_301, Some(true));
    assert_eq!(
        item.migrated_url.as_deref(),
        Some("https://google.com/who-we-are")
    );
}

#[tokio::test]
async fn test_file_store_survives_a_server_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("checklist.json");

    let first = spawn(Store::new(Arc::new(JsonFileStore::new(path.clone())))).await;
    let mut editor = Checklist::new(Arc::new(HttpBackend::new(first)));
    editor.load().await.unwrap();
    editor
        .update_status(ABOUT, Status::Completed, "uid-1")
        .await
        .unwrap();

    // A second server over the same file sees the edit.
    let second = spawn(Store::new(Arc::new(JsonFileStore::new(path)))).await;
    let mut reader = Checklist::new(Arc::new(HttpBackend::new(second)));
    reader.load().await.unwrap();
    assert_eq!(reader.todos()[ABOUT].status, Status::Completed);
}

#[tokio::test]
async fn test_seeded_store_is_served_verbatim() {
    let store = seeded_store(&todo_map(&[(ABOUT, Status::Questioned)])).await;
    let base = spawn(store).await;

    let mut reader = Checklist::new(Arc::new(HttpBackend::new(base)));
    reader.load().await.unwrap();
    assert_eq!(reader.todos()[ABOUT].status, Status::Questioned);
}
