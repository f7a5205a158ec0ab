//! HTTP service for the shared checklist
//!
//! Two JSON resources, each a verbatim pass-through to one store key:
//! `GET`/`PUT /todos` and `GET`/`PUT /settings`. Handlers hold no state of
//! their own; whichever map arrives last wins in full. Every failure maps
//! to `500` with an `{"error": ...}` body and a log line; clients retry
//! manually.

#![forbid(unsafe_code)]
#![warn(unreachable_pub)]

pub mod config;

pub use config::ServerConfig;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use siteshift_model::{TodoMap, UrlSettings};
use siteshift_store::{Store, SETTINGS_KEY, TODOS_KEY};
use tracing::error;

/// Name of this crate, used in startup logging
pub const CRATE_NAME: &str = "siteshift-server";

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Backing key-value store
    pub store: Store,
}

impl AppState {
    /// Create state over `store`
    #[inline]
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Build the service router
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/todos", get(get_todos).put(put_todos))
        .route("/settings", get(get_settings).put(put_settings))
        .with_state(state)
}

fn failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn get_todos(State(state): State<AppState>) -> Response {
    match state.store.get_json::<TodoMap>(TODOS_KEY).await {
        Ok(todos) => Json(todos.unwrap_or_default()).into_response(),
        Err(err) => {
            error!("failed to get todos: {err}");
            failure("Failed to get todos")
        }
    }
}

async fn put_todos(
    State(state): State<AppState>,
    payload: Result<Json<TodoMap>, JsonRejection>,
) -> Response {
    let Json(todos) = match payload {
        Ok(body) => body,
        Err(err) => {
            error!("failed to update todos: {err}");
            return failure("Failed to update todos");
        }
    };

    match state.store.set_json(TODOS_KEY, &todos).await {
        Ok(()) => Json(todos).into_response(),
        Err(err) => {
            error!("failed to update todos: {err}");
            failure("Failed to update todos")
        }
    }
}

async fn get_settings(State(state): State<AppState>) -> Response {
    match state.store.get_json::<UrlSettings>(SETTINGS_KEY).await {
        Ok(settings) => Json(settings.unwrap_or_default()).into_response(),
        Err(err) => {
            error!("failed to get settings: {err}");
            failure("Failed to get settings")
        }
    }
}

async fn put_settings(
    State(state): State<AppState>,
    payload: Result<Json<UrlSettings>, JsonRejection>,
) -> Response {
    let Json(settings) = match payload {
        Ok(body) => body,
        Err(err) => {
            error!("failed to update settings: {err}");
            return failure("Failed to update settings");
        }
    };

    match state.store.set_json(SETTINGS_KEY, &settings).await {
        Ok(()) => Json(settings).into_response(),
        Err(err) => {
            error!("failed to update settings: {err}");
            failure("Failed to update settings")
        }
    }
}
