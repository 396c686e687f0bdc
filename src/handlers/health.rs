//! Root and fallback handlers

use axum::http::StatusCode;

/// Plain-text acknowledgement served at `/`
pub const ROOT_MESSAGE: &str = "There is rootHandler response";

/// GET / - Liveness acknowledgement
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Any unmatched path
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found\n")
}
