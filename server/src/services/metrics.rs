//! Simulated rating and review-count sampling.

use rand::Rng;

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

pub const RATING_MIN: f64 = 3.5;
pub const RATING_MAX: f64 = 5.0;
pub const REVIEWS_MIN: u32 = 50;
pub const REVIEWS_MAX: u32 = 550;

/// Rating and review count for one simulated business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedMetrics {
    pub rating: f64,
    pub reviews: u32,
}

/// Draw a rating uniformly from `[3.5, 5.0]` (rounded to a tenth) and a
/// review count uniformly from `[50, 550]`.
pub fn simulate_metrics<R: Rng + ?Sized>(rng: &mut R) -> SimulatedMetrics {
    let rating = round_to_tenth(rng.random_range(RATING_MIN..=RATING_MAX));
    let reviews = rng.random_range(REVIEWS_MIN..=REVIEWS_MAX);
    SimulatedMetrics { rating, reviews }
}

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
