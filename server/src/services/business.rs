//! Request handling for the two dashboard operations.
//!
//! Both operations are stateless: each call validates its input, consumes
//! randomness, and returns a fresh record. Nothing is remembered between
//! calls, so a regeneration never sees the rating or reviews of an earlier
//! fetch.

use rand::Rng;
use wire::{BusinessMetrics, BusinessQuery, HeadlineResponse};

use super::headline::generate_headline;
use super::metrics::simulate_metrics;

#[cfg(test)]
#[path = "business_test.rs"]
mod tests;

/// Errors produced by business request handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusinessError {
    /// `name` or `location` was empty or absent.
    #[error("{}", wire::REQUIRED_FIELDS_MESSAGE)]
    MissingFields,
}

fn validate(query: &BusinessQuery) -> Result<(), BusinessError> {
    if query.is_complete() { Ok(()) } else { Err(BusinessError::MissingFields) }
}

/// Simulate a full metrics record for `query`.
///
/// # Errors
///
/// Returns [`BusinessError::MissingFields`] if either field is empty.
pub fn fetch_business_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    query: &BusinessQuery,
) -> Result<BusinessMetrics, BusinessError> {
    validate(query)?;
    let metrics = simulate_metrics(rng);
    Ok(BusinessMetrics {
        rating: metrics.rating,
        reviews: metrics.reviews,
        headline: generate_headline(rng, &query.name, &query.location),
    })
}

/// Generate only a fresh headline for `query`.
///
/// # Errors
///
/// Returns [`BusinessError::MissingFields`] if either field is empty.
pub fn regenerate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    query: &BusinessQuery,
) -> Result<HeadlineResponse, BusinessError> {
    validate(query)?;
    Ok(HeadlineResponse { headline: generate_headline(rng, &query.name, &query.location) })
}
