//! PostgreSQL listing store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use sahiplendirme_core::error::{AppError, ErrorKind};
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::listing::ListingFields;
use sahiplendirme_entity::Listing;

use crate::traits::ListingStore;

/// Name of the uniqueness index the reconciler manages.
const ILAN_NO_INDEX: &str = "listings_ilan_no_key";

/// Listing collection backed by the `listings` table.
#[derive(Debug, Clone)]
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    /// Create a new listing store over the shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn find_by_no(&self, ilan_no: i64) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE ilan_no = $1")
            .bind(ilan_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to find listing by number", e)
            })
    }

    async fn list(&self) -> AppResult<Vec<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to list listings", e))
    }

    async fn insert(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Listing> {
        sqlx::query_as::<_, Listing>(
            "INSERT INTO listings \
               (ilan_no, tur, cins, yas, cinsiyet, saglik_durumu, karakter_ozellikleri, \
                bulundugu_yer, iletisim, hikaye, user_id, user_email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(ilan_no)
        .bind(&fields.tur)
        .bind(&fields.cins)
        .bind(&fields.yas)
        .bind(&fields.cinsiyet)
        .bind(&fields.saglik_durumu)
        .bind(&fields.karakter_ozellikleri)
        .bind(&fields.bulundugu_yer)
        .bind(&fields.iletisim)
        .bind(&fields.hikaye)
        .bind(user_id)
        .bind(&user_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to insert listing", e))
    }

    async fn update_fields(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, Listing>(
            "UPDATE listings SET tur = $2, cins = $3, yas = $4, cinsiyet = $5, \
                                 saglik_durumu = $6, karakter_ozellikleri = $7, \
                                 bulundugu_yer = $8, iletisim = $9, hikaye = $10, \
                                 user_id = $11, user_email = $12, updated_at = NOW() \
             WHERE ilan_no = $1 RETURNING *",
        )
        .bind(ilan_no)
        .bind(&fields.tur)
        .bind(&fields.cins)
        .bind(&fields.yas)
        .bind(&fields.cinsiyet)
        .bind(&fields.saglik_durumu)
        .bind(&fields.karakter_ozellikleri)
        .bind(&fields.bulundugu_yer)
        .bind(&fields.iletisim)
        .bind(&fields.hikaye)
        .bind(user_id)
        .bind(&user_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to update listing", e))
    }

    async fn delete_by_no(&self, ilan_no: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE ilan_no = $1")
            .bind(ilan_no)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to delete listing", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_no(&self, id: Uuid, ilan_no: i64) -> AppResult<()> {
        sqlx::query("UPDATE listings SET ilan_no = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(ilan_no)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to set listing number", e)
            })?;
        Ok(())
    }

    async fn max_no(&self) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(ilan_no) FROM listings WHERE ilan_no > 0")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to read max listing number", e)
            })
    }

    async fn drop_no_index(&self) -> AppResult<()> {
        sqlx::query(&format!("DROP INDEX IF EXISTS {ILAN_NO_INDEX}"))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to drop listing number index", e)
            })?;
        Ok(())
    }

    async fn create_no_index(&self) -> AppResult<()> {
        sqlx::query(&format!(
            "CREATE UNIQUE INDEX {ILAN_NO_INDEX} ON listings (ilan_no)"
        ))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to create listing number index", e)
        })?;
        Ok(())
    }
}
