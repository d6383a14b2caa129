//! Networking modules for the dashboard HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the raw HTTP boundary, `api` turns its responses into
//! typed results using the shared `wire` schema.

pub mod api;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
