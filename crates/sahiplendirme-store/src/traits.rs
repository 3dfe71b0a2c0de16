//! Store traits.
//!
//! These traits describe the generic document store the rest of the
//! system is written against: lookups and writes per collection plus the
//! two primitives the sequence subsystem depends on — an atomic
//! single-document increment and a droppable/creatable unique index.

use async_trait::async_trait;
use uuid::Uuid;

use sahiplendirme_core::AppResult;
use sahiplendirme_entity::listing::ListingFields;
use sahiplendirme_entity::user::NewUser;
use sahiplendirme_entity::{Listing, User};

/// User collection operations.
///
/// Implementations must be thread-safe; no coordination happens above
/// this trait.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Find a user by record id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-sensitive, as stored).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user and return the stored record.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Replace a user's profile fields and password hash.
    ///
    /// Returns `None` when no record with `id` exists.
    async fn update(&self, id: Uuid, user: NewUser) -> AppResult<Option<User>>;

    /// Delete a user. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Listing collection operations.
#[async_trait]
pub trait ListingStore: Send + Sync + std::fmt::Debug {
    /// Find a listing by its human-facing number.
    async fn find_by_no(&self, ilan_no: i64) -> AppResult<Option<Listing>>;

    /// List all listings.
    async fn list(&self) -> AppResult<Vec<Listing>>;

    /// Insert a new listing with an assigned number and creator tags.
    async fn insert(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Listing>;

    /// Update the free-text fields (and creator tags) of the listing with
    /// the given number. The number itself is immutable.
    async fn update_fields(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Option<Listing>>;

    /// Delete the listing with the given number. Returns whether a record
    /// was removed.
    async fn delete_by_no(&self, ilan_no: i64) -> AppResult<bool>;

    /// Overwrite the listing number of a specific record by internal id.
    /// Used only by the startup reconciler.
    async fn set_no(&self, id: Uuid, ilan_no: i64) -> AppResult<()>;

    /// The maximum listing number currently present, ignoring sentinel
    /// and unassigned records. `None` when the collection holds no
    /// numbered listings.
    async fn max_no(&self) -> AppResult<Option<i64>>;

    /// Drop the uniqueness index on the listing number. Absent index is
    /// not an error.
    async fn drop_no_index(&self) -> AppResult<()>;

    /// Create the uniqueness index on the listing number. Fails if
    /// duplicate numbers are present.
    async fn create_no_index(&self) -> AppResult<()>;
}

/// Named counter operations.
#[async_trait]
pub trait CounterStore: Send + Sync + std::fmt::Debug {
    /// Read the current value of a named counter.
    async fn get(&self, name: &str) -> AppResult<Option<i64>>;

    /// Create the counter with an initial value if it does not exist.
    /// A concurrent creation wins silently; this is idempotent.
    async fn init_if_absent(&self, name: &str, value: i64) -> AppResult<()>;

    /// Overwrite (or create) the counter with the given value.
    async fn set(&self, name: &str, value: i64) -> AppResult<()>;

    /// Atomically increment the counter and return the new value.
    ///
    /// Returns `None` when the counter does not exist — the caller decides
    /// how to recover.
    async fn increment(&self, name: &str) -> AppResult<Option<i64>>;
}
