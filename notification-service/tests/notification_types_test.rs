//! Notification type listing integration tests.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::*;
use notification_service::services::InMemoryStore;
use tower::util::ServiceExt;

fn authed_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {}", mint_token(900)))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn listing_hides_unavailable_and_sorts_by_key() {
    let app = seeded_app().await;

    let response = app.oneshot(authed_get("/api/notifications/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let types = body["notification_types"].as_array().unwrap();

    let keys: Vec<&str> = types.iter().map(|t| t["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["email_alert", "push_alert", "sms_alert"]);
    assert!(!keys.contains(&"legacy_alert"));
}

#[tokio::test]
async fn deprecated_types_carry_their_reason() {
    let app = seeded_app().await;

    let body = body_json(app.oneshot(authed_get("/api/notifications/")).await.unwrap()).await;
    let types = body["notification_types"].as_array().unwrap();

    let sms = types.iter().find(|t| t["key"] == "sms_alert").unwrap();
    assert_eq!(sms["deprecated"], true);
    assert_eq!(sms["deprecated_reason"], "Replaced by push notifications");

    let email = types.iter().find(|t| t["key"] == "email_alert").unwrap();
    assert_eq!(email["deprecated"], false);
    assert_eq!(email["deprecated_reason"], serde_json::Value::Null);
}

#[tokio::test]
async fn full_descriptions_map_is_returned_unchanged() {
    let app = seeded_app().await;

    let body = body_json(app.oneshot(authed_get("/api/notifications/")).await.unwrap()).await;
    let types = body["notification_types"].as_array().unwrap();

    let email = types.iter().find(|t| t["key"] == "email_alert").unwrap();
    assert_eq!(email["descriptions"]["en"], "Email alerts");
    assert_eq!(email["descriptions"]["fr"], "Alertes par courriel");
}

#[tokio::test]
async fn timestamps_serialize_as_iso8601() {
    let app = seeded_app().await;

    let body = body_json(app.oneshot(authed_get("/api/notifications/")).await.unwrap()).await;
    let email = body["notification_types"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["key"] == "email_alert")
        .unwrap()
        .clone();

    let created_at = email["created_at"].as_str().unwrap();
    assert!(created_at.starts_with("2024-01-15T08:30:00"));
}

#[tokio::test]
async fn repeated_requests_yield_identical_output() {
    let app = seeded_app().await;

    let first = body_json(
        app.clone()
            .oneshot(authed_get("/api/notifications/"))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(app.oneshot(authed_get("/api/notifications/")).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn lang_defaults_and_explicit_lang_agree() {
    let app = seeded_app().await;

    let default_body = body_json(
        app.clone()
            .oneshot(authed_get("/api/notifications/"))
            .await
            .unwrap(),
    )
    .await;
    let explicit_body = body_json(
        app.oneshot(authed_get("/api/notifications/?lang=fr"))
            .await
            .unwrap(),
    )
    .await;

    // The full descriptions map is returned either way.
    assert_eq!(default_body, explicit_body);
}

#[tokio::test]
async fn path_without_trailing_slash_also_works() {
    let app = seeded_app().await;

    let response = app.oneshot(authed_get("/api/notifications")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn lang_below_length_bounds_returns_422() {
    let app = seeded_app().await;

    let response = app
        .oneshot(authed_get("/api/notifications/?lang=x"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Invalid request data.");
    assert_eq!(body["errors"][0]["field"], "lang");
}

#[tokio::test]
async fn lang_above_length_bounds_returns_422() {
    let app = seeded_app().await;

    let response = app
        .oneshot(authed_get("/api/notifications/?lang=abcdef"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Invalid request data.");
}

#[tokio::test]
async fn empty_catalog_yields_empty_list() {
    let app = build_test_app(InMemoryStore::new(vec![notification_type(
        1,
        "legacy_alert",
        &[("en", "Legacy alerts")],
        false,
        true,
        Some("No longer supported"),
    )]))
    .await;

    let body = body_json(app.oneshot(authed_get("/api/notifications/")).await.unwrap()).await;
    assert_eq!(body["notification_types"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn store_failure_returns_500_with_stable_detail() {
    let app = build_test_app(InMemoryStore::failing()).await;

    let response = app.oneshot(authed_get("/api/notifications/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["detail"],
        "Failed to fetch notification types. Please try again later."
    );
    // The simulated cause must never leak into the body
    assert!(!body.to_string().contains("simulated store failure"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = seeded_app().await;

    let response = app.oneshot(authed_get("/api/notifications/")).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("x-request-id"));
}
