//! Integration tests for registration and the authentication flow.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, StatusCode};

use sahiplendirme_core::error::AppError;
use sahiplendirme_core::AppResult;
use sahiplendirme_store::{CounterStore, MemoryStore, UserStore};

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app.register("ayse@test.com", "parola123", false).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "ayse@test.com"
    );
    // The password digest must never appear in a response.
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;

    let first = app.register("ayse@test.com", "parola123", false).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.register("ayse@test.com", "baskaparola", false).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = helpers::TestApp::new().await;

    let response = app.register("not-an-email", "parola123", false).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register("ali@test.com", "parola123", false).await;

    let response = app.login_raw("ali@test.com", "parola123").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert_eq!(
        response.body.get("token_type").unwrap().as_str().unwrap(),
        "bearer"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("ali@test.com", "parola123", false).await;

    let response = app.login_raw("ali@test.com", "yanlis").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app.login_raw("nobody@test.com", "parola123").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let token = app.register_and_login("ben@test.com", "parola123", false).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("email").unwrap().as_str().unwrap(),
        "ben@test.com"
    );
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_user_token_is_rejected() {
    let app = helpers::TestApp::new().await;

    let registered = app.register("gecici@test.com", "parola123", false).await;
    let id = registered.body.get("id").unwrap().as_str().unwrap();
    let id = uuid::Uuid::parse_str(id).unwrap();

    let token = app.login("gecici@test.com", "parola123").await;

    UserStore::delete(&app.store, id).await.unwrap();

    // The token is still cryptographically valid, but the record is gone.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_endpoint_is_open() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
    assert_eq!(response.body.get("store").unwrap().as_str().unwrap(), "ok");
}

/// Counter backend whose every operation fails, as if the store were down.
#[derive(Debug)]
struct DownCounters;

#[async_trait]
impl CounterStore for DownCounters {
    async fn get(&self, _name: &str) -> AppResult<Option<i64>> {
        Err(AppError::store("connection refused"))
    }

    async fn init_if_absent(&self, _name: &str, _value: i64) -> AppResult<()> {
        Err(AppError::store("connection refused"))
    }

    async fn set(&self, _name: &str, _value: i64) -> AppResult<()> {
        Err(AppError::store("connection refused"))
    }

    async fn increment(&self, _name: &str) -> AppResult<Option<i64>> {
        Err(AppError::store("connection refused"))
    }
}

#[tokio::test]
async fn test_health_degrades_when_store_is_down() {
    let app = helpers::TestApp::with_counters(MemoryStore::new(), Arc::new(DownCounters));

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.body.get("status").unwrap().as_str().unwrap(),
        "degraded"
    );
    assert_eq!(
        response.body.get("store").unwrap().as_str().unwrap(),
        "unavailable"
    );
}
