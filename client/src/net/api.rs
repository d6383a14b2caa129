//! Typed calls to the dashboard API.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network, non-2xx status, undecodable body) comes back as
//! an [`ApiError`]. The server's own `error` text is kept on
//! [`ApiError::Status`] for diagnostics, but callers decide what the user
//! sees; the controller shows a fixed message on the fetch path and nothing
//! on the regenerate path.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{BUSINESS_DATA_PATH, BusinessMetrics, BusinessQuery, REGENERATE_HEADLINE_PATH};

use super::transport::{Transport, TransportError, TransportResponse};

/// Errors from a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] wire::WireError),

    /// The request payload could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided `error` text, when the failure was a decoded 4xx/5xx body.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn check_status(response: TransportResponse) -> Result<TransportResponse, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: response.status, detail: wire::decode_error(&response.body) })
    }
}

/// `POST /api/business-data` with `query`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status, or a body
/// that is not a metrics record.
pub async fn fetch_business_data<T: Transport + ?Sized>(
    transport: &T,
    query: &BusinessQuery,
) -> Result<BusinessMetrics, ApiError> {
    let body = serde_json::to_value(query)?;
    let response = check_status(transport.post_json(BUSINESS_DATA_PATH, body).await?)?;
    Ok(wire::decode_metrics(&response.body)?)
}

/// `GET /api/regenerate-headline` for `(name, location)`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status, or a body
/// without a headline.
pub async fn regenerate_headline<T: Transport + ?Sized>(
    transport: &T,
    name: &str,
    location: &str,
) -> Result<String, ApiError> {
    let params = [("name", name), ("location", location)];
    let response = check_status(transport.get(REGENERATE_HEADLINE_PATH, &params).await?)?;
    Ok(wire::decode_headline(&response.body)?.headline)
}
