//! Todo Handlers
//!
//! REST-to-CRUD adapter over the shared `TodoStore`. Items are addressed
//! by 1-based position; an id that is not a positive integer is treated the
//! same as an out-of-range one (404).

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::collections::HashMap;

use super::router::AppState;
use super::state::TodoStore;
use super::types::{AddItemRequest, TodoResponse};
use crate::errors::AppError;

fn parse_id(raw: &str) -> Result<usize, AppError> {
    raw.parse::<usize>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::ItemNotFound(raw.to_string()))
}

/// Run `op` against the store on the blocking pool.
///
/// The store holds its lock across the file write, so it must stay off the
/// async workers.
async fn with_store<T, F>(state: AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&TodoStore) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(state.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Store task panicked: {e}")))?
}

/// GET /todo - All items in the envelope
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoResponse>, AppError> {
    let items = with_store(state, |store| Ok(store.all())).await?;
    Ok(Json(TodoResponse::new(items)))
}

/// GET /todo/{id} - A single item in the envelope
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_id(&id)?;
    let item = with_store(state, move |store| store.get(id)).await?;
    Ok(Json(TodoResponse::new(vec![item])))
}

/// POST /todo - Append a new item
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let req: AddItemRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidInput {
            field: "body".to_string(),
            reason: e.to_string(),
        })?;

    if req.task.trim().is_empty() {
        return Err(AppError::InvalidInput {
            field: "Task".to_string(),
            reason: "task is required".to_string(),
        });
    }

    let task = req.task.clone();
    with_store(state, move |store| store.add(&task)).await?;
    tracing::info!(task = %req.task, "Added todo");

    Ok((StatusCode::CREATED, "Item added"))
}

/// PATCH /todo/{id}?complete - Mark an item completed
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<&'static str, AppError> {
    let id = parse_id(&id)?;

    if !params.contains_key("complete") {
        return Err(AppError::InvalidInput {
            field: "complete".to_string(),
            reason: "missing query parameter".to_string(),
        });
    }

    with_store(state, move |store| store.complete(id)).await?;
    tracing::info!(id, "Completed todo");

    Ok("Item status changed")
}

/// DELETE /todo/{id} - Remove an item, renumbering later ones
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    with_store(state, move |store| store.delete(id)).await?;
    tracing::info!(id, "Deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(super::parse_id("3").unwrap(), 3);
        assert!(super::parse_id("0").is_err());
        assert!(super::parse_id("-1").is_err());
        assert!(super::parse_id("abc").is_err());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let h = TestHarness::new();
        let (status, body) = send(h.router(), get("/todo")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_results"], 0);
        assert_eq!(body["results"], json!([]));
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let h = TestHarness::new();

        let (status, text) = send_text(h.router(), post_json("/todo", &json!({"Task": "x"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(text, "Item added");

        let (status, body) = send(h.router(), get("/todo")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_results"], 1);
        assert_eq!(body["results"][0]["Task"], "x");
    }

    #[tokio::test]
    async fn test_add_empty_task_rejected() {
        let h = TestHarness::new();

        let (status, _) = send_text(h.router(), post_json("/todo", &json!({"Task": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send_text(h.router(), post_json("/todo", &json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(h.store.all().is_empty());
    }

    #[tokio::test]
    async fn test_add_malformed_body_rejected() {
        let h = TestHarness::new();
        let (status, _) = send_text(h.router(), post_raw("/todo", "{\"Task\":")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_complete_requires_query_flag() {
        let h = TestHarness::with_tasks(&["a"]);

        let (status, _) = send_text(h.router(), patch("/todo/1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!h.store.get(1).unwrap().done);

        let (status, text) = send_text(h.router(), patch("/todo/1?complete")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "Item status changed");
        assert!(h.store.get(1).unwrap().done);
    }

    #[tokio::test]
    async fn test_delete_shifts_ids() {
        let h = TestHarness::with_tasks(&["a", "b", "c"]);

        let (status, text) = send_text(h.router(), delete("/todo/2")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(text.is_empty());

        let (_, body) = send(h.router(), get("/todo/2")).await;
        assert_eq!(body["results"][0]["Task"], "c");

        let (status, _) = send_text(h.router(), delete("/todo/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
