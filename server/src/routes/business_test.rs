use super::*;
use crate::routes::app;
use axum::body::Body;
use axum::http::Request;
use serde_json::{Value, json};
use tower::ServiceExt;
use wire::REQUIRED_FIELDS_MESSAGE;

fn test_app() -> axum::Router {
    app(AppState::new(Some(99)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
    (status, body)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/business-data")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn assert_required_fields_error(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, &json!({ "error": REQUIRED_FIELDS_MESSAGE }));
}

#[test]
fn business_error_maps_to_bad_request() {
    assert_eq!(business_error_status(&BusinessError::MissingFields), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn business_error_response_carries_required_fields_body() {
    let response = business_error_response(BusinessError::MissingFields);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body: ErrorResponse = serde_json::from_slice(&bytes).expect("error body");
    assert_eq!(body, ErrorResponse::required_fields());
}

#[tokio::test]
async fn business_data_returns_simulated_metrics() {
    let (status, body) = send(post_json(r#"{"name":"Cake & Co","location":"Mumbai"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let rating: f64 = body["rating"].as_str().expect("rating string").parse().expect("numeric rating");
    assert!((3.5..=5.0).contains(&rating));
    let reviews = body["reviews"].as_u64().expect("integer reviews");
    assert!((50..=550).contains(&reviews));
    let headline = body["headline"].as_str().expect("headline");
    assert!(headline.contains("Cake & Co") && headline.contains("Mumbai"));
}

#[tokio::test]
async fn business_data_rating_has_one_decimal() {
    let (_, body) = send(post_json(r#"{"name":"A","location":"B"}"#)).await;
    let rating = body["rating"].as_str().expect("rating string");
    let (_, frac) = rating.split_once('.').expect("decimal point");
    assert_eq!(frac.len(), 1, "{rating}");
}

#[tokio::test]
async fn business_data_rejects_empty_name() {
    let (status, body) = send(post_json(r#"{"name":"","location":"Mumbai"}"#)).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn business_data_rejects_absent_location() {
    let (status, body) = send(post_json(r#"{"name":"Cake & Co"}"#)).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn business_data_treats_malformed_body_as_missing_fields() {
    let (status, body) = send(post_json("{not json")).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn business_data_treats_missing_content_type_as_missing_fields() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/business-data")
        .body(Body::from(r#"{"name":"A","location":"B"}"#))
        .expect("request");
    let (status, body) = send(request).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn regenerate_returns_only_headline() {
    let (status, body) = send(get("/api/regenerate-headline?name=Cake%20%26%20Co&location=Mumbai")).await;
    assert_eq!(status, StatusCode::OK);
    let obj = body.as_object().expect("object body");
    assert_eq!(obj.len(), 1);
    let headline = obj["headline"].as_str().expect("headline");
    assert!(headline.contains("Cake & Co") && headline.contains("Mumbai"));
    assert!(!headline.contains("{name}") && !headline.contains("{location}"));
}

#[tokio::test]
async fn regenerate_rejects_missing_query() {
    let (status, body) = send(get("/api/regenerate-headline")).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn regenerate_rejects_empty_location() {
    let (status, body) = send(get("/api/regenerate-headline?name=Cake&location=")).await;
    assert_required_fields_error(status, &body);
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = send(get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let request = Request::builder()
        .uri("/api/regenerate-headline?name=A&location=B")
        .header("origin", "http://example.test")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("router should respond");
    let allow = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow, Some("*"));
}
