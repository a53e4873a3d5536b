//! Test helpers for notification-service integration tests.

#![allow(dead_code)]

use axum::Router;
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use notification_service::{
    build_router,
    config::{
        DatabaseConfig, Environment, JwtConfig, SecurityConfig, ServiceConfig, SwaggerConfig,
    },
    models::NotificationType,
    services::{AccessTokenClaims, CatalogService, InMemoryStore, JwtService, NotificationTypeStore},
    AppState,
};
use sqlx::types::Json;
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-secret-0123456789";

pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        common: service_core::config::Config { port: 0 },
        environment: Environment::Dev,
        service_name: "notification-service-test".to_string(),
        service_version: "0.0.0".to_string(),
        log_level: "error".to_string(),
        database: DatabaseConfig {
            url: "postgres://localhost:5432/unused".to_string(),
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            algorithm: "HS256".to_string(),
        },
        security: SecurityConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        swagger: SwaggerConfig { enabled: false },
    }
}

pub fn notification_type(
    id: i32,
    key: &str,
    descriptions: &[(&str, &str)],
    available: bool,
    deprecated: bool,
    deprecated_reason: Option<&str>,
) -> NotificationType {
    NotificationType {
        id,
        key: key.to_string(),
        descriptions: Json(
            descriptions
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        ),
        available,
        deprecated,
        deprecated_reason: deprecated_reason.map(|s| s.to_string()),
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()),
    }
}

/// The catalog fixture: three available types (one deprecated with a
/// reason) and one unavailable type that must never surface.
pub fn seed_records() -> Vec<NotificationType> {
    vec![
        notification_type(
            1,
            "email_alert",
            &[("en", "Email alerts"), ("fr", "Alertes par courriel")],
            true,
            false,
            None,
        ),
        notification_type(
            2,
            "sms_alert",
            &[("en", "SMS alerts")],
            true,
            true,
            Some("Replaced by push notifications"),
        ),
        notification_type(3, "push_alert", &[("en", "Push alerts")], true, false, None),
        notification_type(
            4,
            "legacy_alert",
            &[("en", "Legacy alerts")],
            false,
            true,
            Some("No longer supported"),
        ),
    ]
}

/// Build a router over the given store with test configuration.
pub async fn build_test_app(store: impl NotificationTypeStore + 'static) -> Router {
    let config = test_config();
    let jwt = JwtService::new(&config.jwt).expect("Failed to create JWT service");
    let catalog = CatalogService::new(Arc::new(store));

    let state = AppState {
        config,
        jwt,
        catalog,
    };

    build_router(state).await.expect("Failed to build router")
}

/// Router seeded with the standard catalog fixture.
pub async fn seeded_app() -> Router {
    build_test_app(InMemoryStore::new(seed_records())).await
}

pub fn mint_token(expires_in_secs: i64) -> String {
    mint_token_with(TEST_JWT_SECRET, Algorithm::HS256, expires_in_secs)
}

pub fn mint_token_with(secret: &str, algorithm: Algorithm, expires_in_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: "user_123".to_string(),
        username: "testuser".to_string(),
        exp: now + expires_in_secs,
        iat: now,
    };
    encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to mint test token")
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
