//! HTTP call boundary between the dashboard controller and the API server.
//!
//! DESIGN
//! ======
//! `Transport` is the seam the controller talks through. It only reports
//! the status code and raw body of a response; deciding what a non-2xx
//! status means is left to `api`. `HttpTransport` is the `reqwest`
//! implementation; tests substitute scripted transports.

use std::time::Duration;

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised before any HTTP status was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout, or body-read failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface the dashboard needs.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// `POST` a JSON body to `path`.
    async fn post_json(&self, path: &str, body: serde_json::Value) -> Result<TransportResponse, TransportError>;

    /// `GET` `path` with URL-encoded query parameters.
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport rooted at an API base URL.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeouts(
            base_url,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Build a transport with explicit request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client fails to build.
    pub fn with_timeouts(base_url: &str, request: Duration, connect: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(request)
            .connect_timeout(connect)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: normalize_base_url(base_url) })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: serde_json::Value) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        read_response(response).await
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<TransportResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;
    Ok(TransportResponse { status, body })
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}

fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}
