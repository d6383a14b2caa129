//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two dashboard API endpoints plus a liveness probe
//! under a single Axum router. Cross-origin requests are allowed from any
//! origin so a separately hosted client can call the API directly.

pub mod business;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wire::{BUSINESS_DATA_PATH, REGENERATE_HEADLINE_PATH};

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(BUSINESS_DATA_PATH, post(business::business_data))
        .route(REGENERATE_HEADLINE_PATH, get(business::regenerate_headline))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
