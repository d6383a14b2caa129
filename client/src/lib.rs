//! Business dashboard client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the form and request-lifecycle reducers, `net` is the HTTP
//! boundary to the server, and `controller` wires the two together so each
//! user action issues at most one request and folds its outcome back into
//! state. The `dashboard` binary is a terminal front end over the same
//! controller.

pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod view;

pub use controller::{Dashboard, Dispatch};
pub use state::dashboard::{DashboardState, Field};
