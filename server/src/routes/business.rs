//! Business dashboard routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wire::{BusinessMetrics, BusinessQuery, ErrorResponse, HeadlineResponse};

use crate::services::business::{self, BusinessError};
use crate::state::AppState;

#[cfg(test)]
#[path = "business_test.rs"]
mod tests;

/// `POST /api/business-data` — simulate rating, reviews, and headline.
///
/// A body that cannot be decoded is handled as if both fields were absent.
pub async fn business_data(
    State(state): State<AppState>,
    payload: Result<Json<BusinessQuery>, JsonRejection>,
) -> Result<Json<BusinessMetrics>, Response> {
    let query = match payload {
        Ok(Json(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "business-data body rejected");
            BusinessQuery::default()
        }
    };

    let metrics = state
        .with_rng(|rng| business::fetch_business_metrics(rng, &query))
        .map_err(business_error_response)?;
    Ok(Json(metrics))
}

/// `GET /api/regenerate-headline?name=..&location=..` — fresh headline only.
pub async fn regenerate_headline(
    State(state): State<AppState>,
    params: Result<Query<BusinessQuery>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, Response> {
    let query = match params {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "regenerate-headline query rejected");
            BusinessQuery::default()
        }
    };

    let headline = state
        .with_rng(|rng| business::regenerate_headline(rng, &query))
        .map_err(business_error_response)?;
    Ok(Json(headline))
}

pub(crate) fn business_error_status(err: &BusinessError) -> StatusCode {
    match err {
        BusinessError::MissingFields => StatusCode::BAD_REQUEST,
    }
}

pub(crate) fn business_error_response(err: BusinessError) -> Response {
    let body = match &err {
        BusinessError::MissingFields => ErrorResponse::required_fields(),
    };
    (business_error_status(&err), Json(body)).into_response()
}
