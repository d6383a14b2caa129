//! Shared request/response model for the business dashboard HTTP API.
//!
//! This crate owns the JSON wire representation used by both `server` and
//! `client`: endpoint paths, payload types, and the fixed user-facing
//! validation message. Rating values travel as one-decimal strings
//! (`"4.3"`) but decode from either a string or a number.

use serde::{Deserialize, Serialize};


/// `POST` endpoint returning a full [`BusinessMetrics`] record.
pub const BUSINESS_DATA_PATH: &str = "/api/business-data";

/// `GET` endpoint returning a fresh [`HeadlineResponse`].
pub const REGENERATE_HEADLINE_PATH: &str = "/api/regenerate-headline";

/// Error text returned by both endpoints when `name` or `location` is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Business name and location are required.";

/// Error returned by the `decode_*` helpers.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The body was not valid JSON for the expected payload.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// REQUEST
// =============================================================================

/// The `(name, location)` pair a user submits.
///
/// Missing fields decode as empty strings, so an absent field and an empty
/// one fail validation the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessQuery {
    pub name: String,
    pub location: String,
}

impl BusinessQuery {
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { name: name.into(), location: location.into() }
    }

    /// True when both fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.location.is_empty()
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Simulated metrics for one business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// Star rating in `[3.5, 5.0]`, one decimal place.
    #[serde(with = "rating_format")]
    pub rating: f64,
    /// Review count in `[50, 550]`.
    pub reviews: u32,
    /// Marketing headline mentioning the business and its location.
    pub headline: String,
}

/// Body of a successful `GET /api/regenerate-headline`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

/// Body of any 400 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn required_fields() -> Self {
        Self { error: REQUIRED_FIELDS_MESSAGE.to_owned() }
    }
}

/// Format a rating the way it appears on the wire.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Decode a `POST /api/business-data` success body.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body is not a metrics record.
pub fn decode_metrics(body: &str) -> Result<BusinessMetrics, WireError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a `GET /api/regenerate-headline` success body.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body has no `headline` string.
pub fn decode_headline(body: &str) -> Result<HeadlineResponse, WireError> {
    Ok(serde_json::from_str(body)?)
}

/// Pull the `error` field out of a failure body, if there is one.
#[must_use]
pub fn decode_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body).ok().map(|e| e.error)
}

mod rating_format {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_rating(*rating))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let rating = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n,
            Repr::Text(text) => text.trim().parse::<f64>().map_err(<D::Error as serde::de::Error>::custom)?,
        };
        if rating.is_finite() {
            Ok(rating)
        } else {
            Err(<D::Error as serde::de::Error>::custom(format!("rating must be finite, got {rating}")))
        }
    }
}
