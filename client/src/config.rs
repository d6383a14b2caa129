//! API base URL resolution.
//!
//! The default is baked in at build time from `DASHBOARD_API_URL`; the CLI
//! can still override it at run time.

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Base URL captured from `DASHBOARD_API_URL` when the crate was compiled.
pub const BUILD_API_URL: &str = match option_env!("DASHBOARD_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};
