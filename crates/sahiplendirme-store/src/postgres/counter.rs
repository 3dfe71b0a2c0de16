//! PostgreSQL counter store.
//!
//! The increment is a single `UPDATE ... RETURNING` statement: this is the
//! store's atomic single-document operation and the sole concurrency
//! control for sequence allocation.

use async_trait::async_trait;
use sqlx::PgPool;

use sahiplendirme_core::error::{AppError, ErrorKind};
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::SequenceCounter;

use crate::traits::CounterStore;

/// Counter collection backed by the `sequence_counters` table.
#[derive(Debug, Clone)]
pub struct PgCounterStore {
    pool: PgPool,
}

impl PgCounterStore {
    /// Create a new counter store over the shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for PgCounterStore {
    async fn get(&self, name: &str) -> AppResult<Option<i64>> {
        sqlx::query_as::<_, SequenceCounter>(
            "SELECT name, seq FROM sequence_counters WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map(|counter| counter.map(|c| c.seq))
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to read counter", e))
    }

    async fn init_if_absent(&self, name: &str, value: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sequence_counters (name, seq) VALUES ($1, $2) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to initialize counter", e))?;
        Ok(())
    }

    async fn set(&self, name: &str, value: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sequence_counters (name, seq) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET seq = EXCLUDED.seq",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to set counter", e))?;
        Ok(())
    }

    async fn increment(&self, name: &str) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE sequence_counters SET seq = seq + 1 WHERE name = $1 RETURNING seq",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to increment counter", e))
    }
}
