//! HTTP request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::errors::ErrorMessage;

/// Log every request with method, path, status and latency.
///
/// Error responses produced by `AppError` carry their detailed message in
/// an [`ErrorMessage`] extension, which is logged alongside.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let route = normalize_path(&path);

    match response.extensions().get::<ErrorMessage>() {
        Some(ErrorMessage(message)) if response.status().is_server_error() => {
            tracing::error!(%method, %path, status, error = %message, "Request failed");
        }
        Some(ErrorMessage(message)) => {
            tracing::warn!(%method, %path, status, error = %message, "Request rejected");
        }
        None => {
            tracing::info!(%method, %route, status, latency_ms, "Request handled");
        }
    }

    response
}

/// Collapse positional ids so logs group by route
/// /todo/3 -> /todo/{id}
fn normalize_path(path: &str) -> String {
    let normalized: Vec<&str> = path
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.chars().all(|c| c.is_ascii_digit()) {
                "{id}"
            } else {
                part
            }
        })
        .collect();

    format!("/{}", normalized.join("/"))
}
