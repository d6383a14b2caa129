//! Client-side state.

pub mod dashboard;
