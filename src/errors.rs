//! HTTP error type for the REST server
//!
//! Handlers return `Result<_, AppError>`. Error responses are plain text
//! carrying the canonical status reason; the detailed message travels in a
//! response extension so the request logging middleware can report it.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::todo::TodoError;

/// Detailed error message attached to error responses for logging
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

/// Application error types with proper categorization
#[derive(Debug)]
pub enum AppError {
    // Validation Errors (400)
    InvalidInput { field: String, reason: String },

    // Not Found Errors (404)
    ItemNotFound(String),

    // Internal Errors (500)
    StorageError(String),
    SerializationError(String),

    // Store task failed to run to completion
    Internal(anyhow::Error),
}

impl AppError {
    /// Get error code for log correlation
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,

            Self::ItemNotFound(_) => StatusCode::NOT_FOUND,

            Self::StorageError(_) | Self::SerializationError(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get detailed error message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason } => {
                format!("Invalid input for field '{field}': {reason}")
            }
            Self::ItemNotFound(id) => format!("Item not found: {id}"),
            Self::StorageError(msg) => format!("Storage error: {msg}"),
            Self::SerializationError(msg) => format!("Serialization error: {msg}"),
            Self::Internal(err) => format!("Internal error: {err}"),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::ItemNotFound(i) => Self::ItemNotFound(i.to_string()),
            TodoError::Io { .. } => Self::StorageError(err.to_string()),
            TodoError::Parse { .. } => Self::SerializationError(err.to_string()),
        }
    }
}

/// Plain-text response with the status reason as body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let reason = status.canonical_reason().unwrap_or("Error");

        let mut response = (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{reason}\n"),
        )
            .into_response();
        response
            .extensions_mut()
            .insert(ErrorMessage(format!("[{}] {}", self.code(), self.message())));
        response
    }
}

/// Type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
