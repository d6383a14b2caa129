//! Dashboard form and request-lifecycle state.
//!
//! DESIGN
//! ======
//! One plain struct holds the draft query, the last fetched result, the two
//! in-flight flags, and the visible error. Each transition is a reducer
//! method split at the network boundary: `begin_*` runs before the call and
//! returns the payload to send (or `None` when nothing should be sent), and
//! the `*_succeeded` / `*_failed` reducers apply the outcome afterwards.
//!
//! CONCURRENCY
//! ===========
//! A fetch and a regeneration may be in flight at the same time. Their
//! outcomes are applied in completion order, so whichever resolves last
//! decides the final `result`. Only re-entry into the same operation is
//! refused, mirroring a disabled button.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use wire::{BusinessMetrics, BusinessQuery};

/// Shown when submit is attempted with an empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in both fields.";

/// Shown for any failed fetch, whatever the server said.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong!";

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Location,
}

/// Which requests are currently outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InFlight {
    Idle,
    Fetching,
    Regenerating,
    FetchingAndRegenerating,
}

/// Conceptual display phase derived from the raw fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase<'a> {
    Idle,
    Fetching,
    Ready(&'a BusinessMetrics),
    Regenerating(&'a BusinessMetrics),
    Error(&'a str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub query: BusinessQuery,
    pub result: Option<BusinessMetrics>,
    pub is_fetching: bool,
    pub is_regenerating: bool,
    pub error: Option<String>,
}

impl DashboardState {
    /// Update one draft field. Requests already sent are unaffected.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.query.name = value,
            Field::Location => self.query.location = value,
        }
    }

    /// Start a fetch. Returns the query to send, or `None` when the draft is
    /// incomplete (error set) or a fetch is already running (no change).
    pub fn begin_submit(&mut self) -> Option<BusinessQuery> {
        if self.is_fetching {
            return None;
        }
        if !self.query.is_complete() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_owned());
            return None;
        }
        self.is_fetching = true;
        self.error = None;
        self.result = None;
        Some(self.query.clone())
    }

    pub fn fetch_succeeded(&mut self, metrics: BusinessMetrics) {
        self.result = Some(metrics);
        self.is_fetching = false;
    }

    /// Record a failed fetch. The previous result was already cleared by
    /// [`Self::begin_submit`].
    pub fn fetch_failed(&mut self) {
        self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
        self.is_fetching = false;
    }

    /// Start a regeneration from the current draft (not the query of the
    /// last fetch). Returns `(name, location)` to send, or `None` when there
    /// is no result yet or a regeneration is already running.
    pub fn begin_regenerate(&mut self) -> Option<(String, String)> {
        if self.result.is_none() || self.is_regenerating {
            return None;
        }
        self.is_regenerating = true;
        Some((self.query.name.clone(), self.query.location.clone()))
    }

    /// Replace only the headline; rating and reviews stay as fetched.
    ///
    /// If a later submit cleared the result while this call was in flight,
    /// the headline is dropped rather than producing a partial record.
    pub fn regenerate_succeeded(&mut self, headline: String) {
        if let Some(result) = self.result.as_mut() {
            result.headline = headline;
        }
        self.is_regenerating = false;
    }

    /// Regeneration failures never touch `error` or `result`.
    pub fn regenerate_failed(&mut self) {
        self.is_regenerating = false;
    }

    #[must_use]
    pub fn in_flight(&self) -> InFlight {
        match (self.is_fetching, self.is_regenerating) {
            (false, false) => InFlight::Idle,
            (true, false) => InFlight::Fetching,
            (false, true) => InFlight::Regenerating,
            (true, true) => InFlight::FetchingAndRegenerating,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase<'_> {
        if let Some(error) = self.error.as_deref() {
            return Phase::Error(error);
        }
        if self.is_fetching {
            return Phase::Fetching;
        }
        match self.result.as_ref() {
            Some(result) if self.is_regenerating => Phase::Regenerating(result),
            Some(result) => Phase::Ready(result),
            None => Phase::Idle,
        }
    }
}
