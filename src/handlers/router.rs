//! Router Configuration - Centralized route definitions

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use super::state::TodoStore;
use super::{health, todos};

/// Application state type alias
pub type AppState = Arc<TodoStore>;

/// Build the todo routes
///
/// `GET/POST /todo`, `GET/PATCH/DELETE /todo/{id}`, plus the root
/// acknowledgement and a plain 404 fallback.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/todo", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todo/{id}",
            get(todos::get_todo)
                .patch(todos::complete_todo)
                .delete(todos::delete_todo),
        )
        .fallback(health::not_found)
        .with_state(state)
}

/// Full application router: routes, request logging and request deadline
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    build_routes(state)
        .layer(axum::middleware::from_fn(crate::middleware::log_requests))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
}
