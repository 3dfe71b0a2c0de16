//! Shared test helpers for integration tests.
//!
//! Builds the real router over the in-memory store backend, so the full
//! HTTP surface is exercised without a database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sahiplendirme_api::state::AppState;
use sahiplendirme_auth::jwt::{TokenDecoder, TokenEncoder};
use sahiplendirme_auth::password::PasswordVault;
use sahiplendirme_auth::AuthGate;
use sahiplendirme_core::config::auth::AuthConfig;
use sahiplendirme_service::{ListingService, SequenceAllocator, UserService};
use sahiplendirme_store::{CounterStore, ListingStore, MemoryStore, UserStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory store backend for direct manipulation
    pub store: MemoryStore,
}

fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        access_ttl_minutes: 30,
    }
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Self {
        let store = MemoryStore::new();
        let counters: Arc<dyn CounterStore> = Arc::new(store.clone());
        Self::with_counters(store, counters)
    }

    /// Wire the app with an explicit counter store backend, so tests can
    /// substitute one that fails
    pub fn with_counters(store: MemoryStore, counters: Arc<dyn CounterStore>) -> Self {
        let auth_config = test_auth_config();

        let users: Arc<dyn UserStore> = Arc::new(store.clone());
        let listings: Arc<dyn ListingStore> = Arc::new(store.clone());

        let vault = Arc::new(PasswordVault::new());
        let encoder = Arc::new(TokenEncoder::new(&auth_config));
        let decoder = Arc::new(TokenDecoder::new(&auth_config));
        let gate = Arc::new(AuthGate::new(
            Arc::clone(&users),
            Arc::clone(&vault),
            decoder,
        ));

        let allocator = SequenceAllocator::new(Arc::clone(&counters), Arc::clone(&listings));
        let listing_service = Arc::new(ListingService::new(listings, allocator));
        let user_service = Arc::new(UserService::new(users, vault));

        let app_state = AppState {
            gate,
            encoder,
            listing_service,
            user_service,
            counters,
        };

        let router = sahiplendirme_api::router::build_router(app_state);

        Self { router, store }
    }

    /// Register a user and return the response
    pub async fn register(&self, email: &str, password: &str, is_admin: bool) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "first_name": "Test",
                "last_name": "User",
                "email": email,
                "phone": "5551234567",
                "is_admin": is_admin,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Login and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.login_raw(email, password).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Submit the login form and return the raw response
    pub async fn login_raw(&self, email: &str, password: &str) -> TestResponse {
        let form = format!("username={}&password={}", email, password);

        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Register a user, log in, and return the bearer token
    pub async fn register_and_login(&self, email: &str, password: &str, is_admin: bool) -> String {
        let response = self.register(email, password, is_admin).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        self.login(email, password).await
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

/// A listing payload with all free-text fields filled in
pub fn listing_payload(tur: &str) -> Value {
    serde_json::json!({
        "tur": tur,
        "cins": "tekir",
        "yas": "2",
        "cinsiyet": "dişi",
        "saglik_durumu": "aşıları tam",
        "karakter_ozellikleri": "oyuncu",
        "bulundugu_yer": "Ankara",
        "iletisim": "5550001122",
        "hikaye": "sokaktan kurtarıldı",
    })
}
