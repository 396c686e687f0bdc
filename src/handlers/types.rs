//! API request and response types shared by the server and the client

use serde::{Deserialize, Serialize};

use crate::todo::Item;

/// Envelope wrapping list/get responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    pub results: Vec<Item>,
    /// Unix seconds at which the response was produced
    pub date: i64,
    pub total_results: usize,
}

impl TodoResponse {
    pub fn new(results: Vec<Item>) -> Self {
        Self {
            total_results: results.len(),
            results,
            date: chrono::Utc::now().timestamp(),
        }
    }
}

/// Body of `POST /todo`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItemRequest {
    #[serde(rename = "Task", alias = "task", default)]
    pub task: String,
}
