//! Listing CRUD over the document store.
//!
//! Permission checks happen at the API boundary (the routing layer knows
//! whether a request reads or writes); this service only orchestrates
//! number allocation, creator tagging, and store access.

use std::sync::Arc;

use tracing::info;

use sahiplendirme_core::error::AppError;
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::listing::ListingFields;
use sahiplendirme_entity::{Listing, User};
use sahiplendirme_store::ListingStore;

use crate::sequence::SequenceAllocator;
use crate::ILAN_SEQUENCE;

/// Handles listing create, read, update, and delete.
#[derive(Clone)]
pub struct ListingService {
    /// Listing collection.
    listings: Arc<dyn ListingStore>,
    /// Sequence allocator for new listing numbers.
    allocator: SequenceAllocator,
}

impl std::fmt::Debug for ListingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingService").finish()
    }
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(listings: Arc<dyn ListingStore>, allocator: SequenceAllocator) -> Self {
        Self {
            listings,
            allocator,
        }
    }

    /// Creates a listing: allocates the next number and tags the creator.
    pub async fn create(&self, creator: &User, fields: ListingFields) -> AppResult<Listing> {
        let ilan_no = self.allocator.next(ILAN_SEQUENCE).await?;

        let listing = self
            .listings
            .insert(
                ilan_no,
                fields,
                Some(creator.id),
                Some(creator.email.clone()),
            )
            .await?;

        info!(ilan_no = ilan_no, user = %creator.email, "Listing created");
        Ok(listing)
    }

    /// Lists all listings.
    pub async fn list(&self) -> AppResult<Vec<Listing>> {
        self.listings.list().await
    }

    /// Fetches a listing by its number.
    pub async fn get(&self, ilan_no: i64) -> AppResult<Listing> {
        self.listings
            .find_by_no(ilan_no)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Listing {ilan_no} not found")))
    }

    /// Updates a listing's free-text fields. The listing number is
    /// immutable; the creator tags are re-stamped with the updating user.
    pub async fn update(
        &self,
        updater: &User,
        ilan_no: i64,
        fields: ListingFields,
    ) -> AppResult<Listing> {
        self.listings
            .update_fields(
                ilan_no,
                fields,
                Some(updater.id),
                Some(updater.email.clone()),
            )
            .await?
            .ok_or_else(|| AppError::not_found(format!("Listing {ilan_no} not found")))
    }

    /// Deletes a listing by its number.
    pub async fn delete(&self, ilan_no: i64) -> AppResult<()> {
        let removed = self.listings.delete_by_no(ilan_no).await?;
        if !removed {
            return Err(AppError::not_found(format!("Listing {ilan_no} not found")));
        }
        info!(ilan_no = ilan_no, "Listing deleted");
        Ok(())
    }
}
