//! Listing ("ilan") entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Sentinel value written to records that lack a listing number while the
/// reconciler is pending reassignment.
pub const ILAN_NO_SENTINEL: i64 = -1;

/// A pet adoption listing.
///
/// `ilan_no` is the human-facing identifier: unique across the collection
/// and immutable once assigned. `id` is the store's internal record key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Listing {
    /// Internal record identifier.
    pub id: Uuid,
    /// Human-facing listing number. `None` only for legacy records that
    /// pre-date the uniqueness invariant; the startup reconciler assigns
    /// a number to every such record before the server accepts traffic.
    pub ilan_no: Option<i64>,
    /// Animal type (cat, dog, ...).
    pub tur: String,
    /// Breed.
    pub cins: String,
    /// Age.
    pub yas: String,
    /// Sex.
    pub cinsiyet: String,
    /// Health condition.
    pub saglik_durumu: String,
    /// Character traits.
    pub karakter_ozellikleri: String,
    /// Location.
    pub bulundugu_yer: String,
    /// Contact information.
    pub iletisim: String,
    /// The animal's story.
    pub hikaye: String,
    /// Record id of the creating user.
    pub user_id: Option<Uuid>,
    /// Email of the creating user.
    pub user_email: Option<String>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Free-text listing fields supplied by the caller.
///
/// Everything except the assigned `ilan_no` and the creator tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFields {
    /// Animal type.
    pub tur: String,
    /// Breed.
    pub cins: String,
    /// Age.
    pub yas: String,
    /// Sex.
    pub cinsiyet: String,
    /// Health condition.
    pub saglik_durumu: String,
    /// Character traits.
    pub karakter_ozellikleri: String,
    /// Location.
    pub bulundugu_yer: String,
    /// Contact information.
    pub iletisim: String,
    /// The animal's story.
    pub hikaye: String,
}
