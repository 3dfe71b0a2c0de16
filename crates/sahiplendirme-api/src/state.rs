//! Application state shared across all handlers.

use std::sync::Arc;

use sahiplendirme_auth::jwt::TokenEncoder;
use sahiplendirme_auth::AuthGate;
use sahiplendirme_service::{ListingService, UserService};
use sahiplendirme_store::CounterStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
/// Configuration is consumed at wiring time; handlers only ever see the
/// services built from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authentication and authorization gate
    pub gate: Arc<AuthGate>,
    /// JWT token encoder
    pub encoder: Arc<TokenEncoder>,
    /// Listing CRUD service
    pub listing_service: Arc<ListingService>,
    /// User registration and admin CRUD service
    pub user_service: Arc<UserService>,
    /// Counter store, used by the health probe as a cheap store ping
    pub counters: Arc<dyn CounterStore>,
}
