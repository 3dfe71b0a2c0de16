//! Store migration runner.

use sqlx::PgPool;
use tracing::info;

use sahiplendirme_core::error::{AppError, ErrorKind};

/// Run all pending migrations.
///
/// The `ilan_no` unique index is deliberately not created here; the
/// startup reconciler owns its lifecycle.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running store migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Store,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Store migrations completed successfully");
    Ok(())
}
