//! Plain-text rendering of the dashboard card.

use std::fmt::Write;

use crate::state::dashboard::{DashboardState, Phase};

/// Render the result card, titled with the current draft. `None` when no
/// result is stored.
#[must_use]
pub fn render_card(state: &DashboardState) -> Option<String> {
    let result = state.result.as_ref()?;
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", state.query.name, state.query.location);
    let _ = writeln!(out, "Google Rating:      {} ★", wire::format_rating(result.rating));
    let _ = writeln!(out, "Number of Reviews:  {}", result.reviews);
    let _ = writeln!(out, "AI-Generated SEO Headline:");
    let _ = write!(out, "  \"{}\"", result.headline);
    Some(out)
}

/// One-line status for the current phase.
#[must_use]
pub fn render_status(state: &DashboardState) -> String {
    match state.phase() {
        Phase::Idle => "idle".to_owned(),
        Phase::Fetching => "fetching...".to_owned(),
        Phase::Ready(_) => "ready".to_owned(),
        Phase::Regenerating(_) => "regenerating headline...".to_owned(),
        Phase::Error(message) => format!("error: {message}"),
    }
}
