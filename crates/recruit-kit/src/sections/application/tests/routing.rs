use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::sections::application::application_router;
use crate::sections::application::router::review_handler;

fn post_json(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn phone_route_returns_validation_payload() {
    let router = application_router(state_with_board());

    let response = router
        .oneshot(post_json(
            "/api/v1/application/phone",
            json!({ "phone": "0151 23456789" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isValid"], json!(true));
    assert_eq!(payload["type"], json!("mobile"));
    assert_eq!(payload["formatted"], json!("+49 151 2345 6789"));
    assert!(payload.get("error").is_none());
}

#[tokio::test]
async fn phone_route_treats_non_string_input_as_blank() {
    let router = application_router(state_with_board());

    let response = router
        .oneshot(post_json(
            "/api/v1/application/phone",
            json!({ "phone": { "nested": true } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isValid"], json!(false));
    assert_eq!(payload["type"], json!("none"));
    assert_eq!(payload["reason"], json!("empty"));
}

#[tokio::test]
async fn email_route_reports_warnings() {
    let router = application_router(state_with_board());

    let response = router
        .oneshot(post_json(
            "/api/v1/application/email",
            json!({ "email": "user@mailinator.com" }),
        ))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["isValid"], json!(true));
    assert_eq!(payload["warnings"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn review_handler_returns_unprocessable_for_invalid_form() {
    let mut form = form();
    form.phone = "030 1234567".to_string();

    let response = review_handler(State(state_with_board()), axum::Json(form)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["issues"][0]["field"], json!("phone"));
}

#[tokio::test]
async fn review_route_accepts_complete_form() {
    let router = application_router(state_with_board());

    let response = router
        .oneshot(post_json(
            "/api/v1/application/review",
            serde_json::to_value(form()).expect("form serializes"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isValid"], json!(true));
    assert_eq!(payload["issues"], json!([]));
}
