//! Async controller that drives [`DashboardState`] through a [`Transport`].
//!
//! DESIGN
//! ======
//! The controller owns the state behind a mutex and is cheap to clone, so a
//! submit and a regeneration can run as separate tasks. The lock is only
//! held while a reducer runs, never across a network call; outcomes are
//! written in whatever order the responses arrive.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api;
use crate::net::transport::Transport;
use crate::state::dashboard::{DashboardState, Field};

/// Whether an operation reached the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Issued,
    Skipped,
}

pub struct Dashboard<T: ?Sized> {
    transport: Arc<T>,
    state: Arc<Mutex<DashboardState>>,
}

impl<T: ?Sized> Clone for Dashboard<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport), state: Arc::clone(&self.state) }
    }
}

impl<T: Transport + ?Sized> Dashboard<T> {
    #[must_use]
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport, state: Arc::new(Mutex::new(DashboardState::default())) }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DashboardState {
        self.update(|state| state.clone())
    }

    pub fn edit_field(&self, field: Field, value: impl Into<String>) {
        self.update(|state| state.edit_field(field, value));
    }

    /// Validate the draft and, if complete, fetch fresh metrics for it.
    pub async fn submit(&self) -> Dispatch {
        let Some(query) = self.update(DashboardState::begin_submit) else {
            return Dispatch::Skipped;
        };

        match api::fetch_business_data(self.transport.as_ref(), &query).await {
            Ok(metrics) => self.update(|state| state.fetch_succeeded(metrics)),
            Err(e) => {
                tracing::warn!(error = %e, detail = ?e.detail(), "business data fetch failed");
                self.update(DashboardState::fetch_failed);
            }
        }
        Dispatch::Issued
    }

    /// Request a new headline for the current draft and patch it into the
    /// stored result. Failures are logged only.
    pub async fn regenerate(&self) -> Dispatch {
        let Some((name, location)) = self.update(DashboardState::begin_regenerate) else {
            return Dispatch::Skipped;
        };

        match api::regenerate_headline(self.transport.as_ref(), &name, &location).await {
            Ok(headline) => self.update(|state| state.regenerate_succeeded(headline)),
            Err(e) => {
                tracing::warn!(error = %e, detail = ?e.detail(), "failed to regenerate headline");
                self.update(DashboardState::regenerate_failed);
            }
        }
        Dispatch::Issued
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
