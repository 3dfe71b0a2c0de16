//! In-memory store using a Tokio mutex for single-node tests and
//! development.
//!
//! The mutex gives the same atomicity the production backend gets from the
//! store's single-document operations: a counter increment or an index
//! creation observes a consistent snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use sahiplendirme_core::error::AppError;
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::listing::ListingFields;
use sahiplendirme_entity::user::NewUser;
use sahiplendirme_entity::{Listing, User};

use crate::traits::{CounterStore, ListingStore, UserStore};

/// Internal state shared by all three collections.
#[derive(Debug, Default)]
struct InnerState {
    /// User records in insertion order.
    users: Vec<User>,
    /// Listing records in insertion order.
    listings: Vec<Listing>,
    /// Named counters.
    counters: HashMap<String, i64>,
    /// Whether the uniqueness index on the listing number exists.
    no_index: bool,
}

/// In-memory store implementing all three store traits.
///
/// Suitable for single-node deployments and tests only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw listing record, optionally without a listing number.
    /// Test helper for exercising the reconciler.
    pub async fn seed_listing(&self, ilan_no: Option<i64>, fields: ListingFields) -> Listing {
        let now = Utc::now();
        let listing = Listing {
            id: Uuid::new_v4(),
            ilan_no,
            tur: fields.tur,
            cins: fields.cins,
            yas: fields.yas,
            cinsiyet: fields.cinsiyet,
            saglik_durumu: fields.saglik_durumu,
            karakter_ozellikleri: fields.karakter_ozellikleri,
            bulundugu_yer: fields.bulundugu_yer,
            iletisim: fields.iletisim,
            hikaye: fields.hikaye,
            user_id: None,
            user_email: None,
            created_at: now,
            updated_at: now,
        };
        let mut state = self.state.lock().await;
        state.listings.push(listing.clone());
        listing
    }

    /// Whether the uniqueness index is currently established.
    pub async fn has_no_index(&self) -> bool {
        self.state.lock().await.no_index
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        Ok(state.users.clone())
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            is_admin: user.is_admin,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        let mut state = self.state.lock().await;
        state.users.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, user: NewUser) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;
        match state.users.iter_mut().find(|u| u.id == id) {
            Some(record) => {
                record.first_name = user.first_name;
                record.last_name = user.last_name;
                record.email = user.email;
                record.phone = user.phone;
                record.is_admin = user.is_admin;
                record.password_hash = user.password_hash;
                record.updated_at = Utc::now();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        Ok(state.users.len() < before)
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn find_by_no(&self, ilan_no: i64) -> AppResult<Option<Listing>> {
        let state = self.state.lock().await;
        Ok(state
            .listings
            .iter()
            .find(|l| l.ilan_no == Some(ilan_no))
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<Listing>> {
        let state = self.state.lock().await;
        Ok(state.listings.clone())
    }

    async fn insert(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Listing> {
        let now = Utc::now();
        let listing = Listing {
            id: Uuid::new_v4(),
            ilan_no: Some(ilan_no),
            tur: fields.tur,
            cins: fields.cins,
            yas: fields.yas,
            cinsiyet: fields.cinsiyet,
            saglik_durumu: fields.saglik_durumu,
            karakter_ozellikleri: fields.karakter_ozellikleri,
            bulundugu_yer: fields.bulundugu_yer,
            iletisim: fields.iletisim,
            hikaye: fields.hikaye,
            user_id,
            user_email,
            created_at: now,
            updated_at: now,
        };
        let mut state = self.state.lock().await;
        state.listings.push(listing.clone());
        Ok(listing)
    }

    async fn update_fields(
        &self,
        ilan_no: i64,
        fields: ListingFields,
        user_id: Option<Uuid>,
        user_email: Option<String>,
    ) -> AppResult<Option<Listing>> {
        let mut state = self.state.lock().await;
        match state
            .listings
            .iter_mut()
            .find(|l| l.ilan_no == Some(ilan_no))
        {
            Some(record) => {
                record.tur = fields.tur;
                record.cins = fields.cins;
                record.yas = fields.yas;
                record.cinsiyet = fields.cinsiyet;
                record.saglik_durumu = fields.saglik_durumu;
                record.karakter_ozellikleri = fields.karakter_ozellikleri;
                record.bulundugu_yer = fields.bulundugu_yer;
                record.iletisim = fields.iletisim;
                record.hikaye = fields.hikaye;
                record.user_id = user_id;
                record.user_email = user_email;
                record.updated_at = Utc::now();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_no(&self, ilan_no: i64) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.listings.len();
        state.listings.retain(|l| l.ilan_no != Some(ilan_no));
        Ok(state.listings.len() < before)
    }

    async fn set_no(&self, id: Uuid, ilan_no: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if let Some(record) = state.listings.iter_mut().find(|l| l.id == id) {
            record.ilan_no = Some(ilan_no);
            record.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn max_no(&self) -> AppResult<Option<i64>> {
        let state = self.state.lock().await;
        Ok(state
            .listings
            .iter()
            .filter_map(|l| l.ilan_no)
            .filter(|n| *n > 0)
            .max())
    }

    async fn drop_no_index(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.no_index = false;
        Ok(())
    }

    async fn create_no_index(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let mut seen = std::collections::HashSet::new();
        for listing in &state.listings {
            if let Some(no) = listing.ilan_no {
                if !seen.insert(no) {
                    return Err(AppError::store(format!(
                        "Duplicate listing number {no} while creating unique index"
                    )));
                }
            }
        }
        state.no_index = true;
        Ok(())
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, name: &str) -> AppResult<Option<i64>> {
        let state = self.state.lock().await;
        Ok(state.counters.get(name).copied())
    }

    async fn init_if_absent(&self, name: &str, value: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.counters.entry(name.to_string()).or_insert(value);
        Ok(())
    }

    async fn set(&self, name: &str, value: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.counters.insert(name.to_string(), value);
        Ok(())
    }

    async fn increment(&self, name: &str) -> AppResult<Option<i64>> {
        let mut state = self.state.lock().await;
        match state.counters.get_mut(name) {
            Some(seq) => {
                *seq += 1;
                Ok(Some(*seq))
            }
            None => Ok(None),
        }
    }
}
