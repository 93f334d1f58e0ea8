//! Backend API
//!
//! HTTP bindings to the catalog REST service, organized by resource.
//! Every call goes through [`Transport`], so the browser `fetch` binding can
//! be swapped for a recording mock in tests.

mod category;
mod fetch;
mod product;

#[cfg(test)]
pub mod mock;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;

pub use category::*;
pub use fetch::FetchTransport;
pub use product::*;

/// Characters left unescaped in query keys and values (RFC 3986 unreserved)
const QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Errors raised while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outgoing request, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Absolute URL including the percent-encoded query string
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url, self.path);
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", utf8_percent_encode(key, QUERY), utf8_percent_encode(value, QUERY)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend.
///
/// Futures are `!Send`: everything runs on the single wasm thread.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Cheap-to-clone handle used by all endpoint functions
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client backed by browser `fetch` against the configured origin
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(FetchTransport::new(&config.api_base_url)))
    }

    /// `GET` a path and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(ApiRequest::new(Method::Get, path)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request whose response body is plain text
    pub async fn send_text(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.execute(request).await
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        log::debug!("{} {}", method, path);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::debug!("{} {} -> {}", method, path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_without_query() {
        let request = ApiRequest::new(Method::Get, "/api/Category");
        assert_eq!(request.url("http://localhost:5004"), "http://localhost:5004/api/Category");
    }

    #[test]
    fn test_url_encodes_query() {
        let request = ApiRequest::new(Method::Delete, "/api/Product")
            .query("id", "12")
            .query("note", "a b&c");
        assert_eq!(
            request.url("http://localhost:5004"),
            "http://localhost:5004/api/Product?id=12&note=a%20b%26c"
        );
    }

    #[test]
    fn test_status_range() {
        assert!(ApiResponse { status: 204, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 199, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 400, body: String::new() }.is_success());
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let mock = MockTransport::new();
        mock.respond_json(Method::Get, "/api/Numbers", json!([1, 2, 3]));

        let numbers: Vec<u32> = mock.client().get_json("/api/Numbers").await.unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_json_rejects_malformed_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/Numbers", 200, "not json");

        let result: Result<Vec<u32>, ApiError> = mock.client().get_json("/api/Numbers").await;
        assert!(matches!(result, Err(ApiError::Json(_))));
    }

    #[tokio::test]
    async fn test_send_text_accepts_plain_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/Things", 200, "Created successfully");

        let text = mock
            .client()
            .send_text(ApiRequest::new(Method::Post, "/api/Things"))
            .await
            .unwrap();
        assert_eq!(text, "Created successfully");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mock = MockTransport::new();
        mock.respond(Method::Put, "/api/Things", 500, "boom");

        let err = mock
            .client()
            .send_text(ApiRequest::new(Method::Put, "/api/Things"))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_network_failure_is_error() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/Things", "connection refused");

        let result: Result<Vec<u32>, ApiError> = mock.client().get_json("/api/Things").await;
        assert!(matches!(result, Err(ApiError::Network(msg)) if msg == "connection refused"));
    }
}
