//! Sahiplendirme Server — pet adoption listing backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use sahiplendirme_api::state::AppState;
use sahiplendirme_auth::jwt::{TokenDecoder, TokenEncoder};
use sahiplendirme_auth::password::PasswordVault;
use sahiplendirme_auth::AuthGate;
use sahiplendirme_core::config::AppConfig;
use sahiplendirme_core::error::AppError;
use sahiplendirme_service::{ListingService, SequenceAllocator, StoreReconciler, UserService};
use sahiplendirme_store::postgres::{PgCounterStore, PgListingStore, PgUserStore};
use sahiplendirme_store::{CounterStore, ListingStore, StorePool, UserStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("SAHIPLENDIRME_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Sahiplendirme v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Store connection + migrations ────────────────────
    tracing::info!("Connecting to store...");
    let store_pool = StorePool::connect(&config.store).await?;

    sahiplendirme_store::migration::run_migrations(store_pool.pool()).await?;

    // ── Step 2: Store backends ───────────────────────────────────
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(store_pool.pool().clone()));
    let listings: Arc<dyn ListingStore> = Arc::new(PgListingStore::new(store_pool.pool().clone()));
    let counters: Arc<dyn CounterStore> = Arc::new(PgCounterStore::new(store_pool.pool().clone()));

    // ── Step 3: Reconcile listing numbers ────────────────────────
    // Must finish before the listener binds; a failure here means the
    // uniqueness invariant could not be restored and serving traffic
    // against the store would be unsafe.
    let reconciler = StoreReconciler::new(Arc::clone(&listings), Arc::clone(&counters));
    let report = reconciler.run().await?;
    tracing::info!(
        scanned = report.scanned,
        reassigned = report.reassigned,
        "Listing store reconciled"
    );

    // ── Step 4: Auth system ──────────────────────────────────────
    let vault = Arc::new(PasswordVault::new());
    let encoder = Arc::new(TokenEncoder::new(&config.auth));
    let decoder = Arc::new(TokenDecoder::new(&config.auth));
    let gate = Arc::new(AuthGate::new(
        Arc::clone(&users),
        Arc::clone(&vault),
        Arc::clone(&decoder),
    ));

    // ── Step 5: Services ─────────────────────────────────────────
    let allocator = SequenceAllocator::new(Arc::clone(&counters), Arc::clone(&listings));
    let listing_service = Arc::new(ListingService::new(Arc::clone(&listings), allocator));
    let user_service = Arc::new(UserService::new(Arc::clone(&users), Arc::clone(&vault)));

    // ── Step 6: HTTP server ──────────────────────────────────────
    let app_state = AppState {
        gate,
        encoder,
        listing_service,
        user_service,
        counters,
    };

    let app = sahiplendirme_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Sahiplendirme server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    store_pool.close().await;
    tracing::info!("Sahiplendirme server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
