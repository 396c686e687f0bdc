//! HTTP client for the todo REST API
//!
//! Every request carries a fixed 10-second timeout. Failures are classified
//! into [`ClientError`] kinds; nothing is retried.

use reqwest::{Method, StatusCode};
use std::time::Duration;

use crate::handlers::types::{AddItemRequest, TodoResponse};
use crate::todo::Item;

/// Request timeout applied to every call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the todo API client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived in time
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected status code or an undecodable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A 200 response with no results where at least one was expected
    #[error("Invalid data: no results")]
    InvalidData,

    #[error("Not a number: {0}")]
    NotNumber(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Parse a positional item id given on the command line
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::NotNumber(format!("{raw:?}: argument must be a number")))
}

/// Async client for the todo REST API
#[derive(Clone, Debug)]
pub struct TodoClient {
    client: reqwest::Client,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /todo
    pub async fn get_all(&self) -> Result<Vec<Item>> {
        self.get_items(&format!("{}/todo", self.base_url)).await
    }

    /// GET /todo/{id}, returning the single result
    pub async fn get_one(&self, id: i64) -> Result<Item> {
        let items = self
            .get_items(&format!("{}/todo/{id}", self.base_url))
            .await?;
        items.into_iter().next().ok_or(ClientError::InvalidData)
    }

    /// POST /todo, expecting 201 Created
    pub async fn add(&self, task: &str) -> Result<()> {
        let body = AddItemRequest {
            task: task.to_string(),
        };
        let request = self
            .client
            .request(Method::POST, format!("{}/todo", self.base_url))
            .json(&body);
        self.send_expecting(request, StatusCode::CREATED).await
    }

    /// PATCH /todo/{id}?complete, expecting 200 OK
    pub async fn complete(&self, id: i64) -> Result<()> {
        let request = self
            .client
            .request(Method::PATCH, format!("{}/todo/{id}?complete", self.base_url));
        self.send_expecting(request, StatusCode::OK).await
    }

    /// DELETE /todo/{id}, expecting 204 No Content
    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, format!("{}/todo/{id}", self.base_url));
        self.send_expecting(request, StatusCode::NO_CONTENT).await
    }

    async fn get_items(&self, url: &str) -> Result<Vec<Item>> {
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(status_error(status, resp).await);
        }

        let envelope: TodoResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("failed to decode body: {e}")))?;

        if envelope.total_results == 0 {
            return Err(ClientError::InvalidData);
        }
        Ok(envelope.results)
    }

    async fn send_expecting(
        &self,
        request: reqwest::RequestBuilder,
        expected: StatusCode,
    ) -> Result<()> {
        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = resp.status();
        tracing::debug!(url = %resp.url(), %status, "Response");
        if status != expected {
            return Err(status_error(status, resp).await);
        }
        Ok(())
    }
}

/// Classify an unexpected status, carrying the response body text
async fn status_error(status: StatusCode, resp: reqwest::Response) -> ClientError {
    let body = match resp.text().await {
        Ok(text) => text.trim().to_string(),
        Err(e) => return ClientError::InvalidResponse(format!("cannot read body: {e}")),
    };
    let msg = format!("{status}, {body}");

    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(msg)
    } else {
        ClientError::InvalidResponse(msg)
    }
}
