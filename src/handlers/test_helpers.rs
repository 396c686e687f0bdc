//! Shared test utilities for handler unit tests.
//!
//! Provides a [`TestHarness`] that sets up a [`TodoStore`] backed by a JSON
//! file in a temp directory, plus convenience helpers for building requests
//! and reading response bodies.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot()

use super::router::build_router;
use super::state::TodoStore;
use crate::todo::TodoList;

/// A self-contained test environment with its own temp storage.
///
/// Holds `TempDir` so the directory isn't cleaned up until the harness drops.
pub struct TestHarness {
    pub store: Arc<TodoStore>,
    _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness over an empty list.
    pub fn new() -> Self {
        Self::with_tasks(&[])
    }

    /// Create a harness whose file already holds `tasks`, in order.
    pub fn with_tasks(tasks: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("todo_server.json");

        let mut list = TodoList::new();
        for task in tasks {
            list.add(*task);
        }
        list.save(&path).expect("failed to seed todo file");

        let store = TodoStore::open(&path).expect("failed to open test TodoStore");

        Self {
            store: Arc::new(store),
            _temp_dir: temp_dir,
        }
    }

    /// Build the full application router.
    pub fn router(&self) -> Router {
        build_router(self.store.clone(), Duration::from_secs(10))
    }
}

// ---------- Request builders ----------

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json<T: serde::Serialize>(uri: &str, body: &T) -> Request<Body> {
    let json = serde_json::to_string(body).unwrap();
    post_raw(uri, &json)
}

/// POST with an arbitrary (possibly malformed) JSON body.
pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn patch(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ---------- Response helpers ----------

/// Send a request through the router and return (status, JSON body).
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, text) = send_text(app, req).await;
    let json = if text.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
    };
    (status, json)
}

/// Send a request and return (status, body text).
pub async fn send_text(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body_bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body_bytes).to_string())
}
