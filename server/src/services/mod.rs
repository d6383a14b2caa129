//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the simulation logic so route handlers can stay
//! focused on protocol translation. Every sampling function takes the random
//! source as a parameter; none of them keeps state of its own.

pub mod business;
pub mod headline;
pub mod metrics;
