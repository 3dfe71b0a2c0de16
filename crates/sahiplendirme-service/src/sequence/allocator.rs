//! Atomic allocation of the next value in a named monotonic sequence.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use sahiplendirme_core::result::AppResult;
use sahiplendirme_store::{CounterStore, ListingStore};

/// Hands out unique, strictly increasing sequence values.
///
/// The store's atomic single-document increment is the sole concurrency
/// control; no in-process locking is used.
#[derive(Clone)]
pub struct SequenceAllocator {
    /// Counter collection.
    counters: Arc<dyn CounterStore>,
    /// Listing collection, used to seed an absent counter.
    listings: Arc<dyn ListingStore>,
}

impl std::fmt::Debug for SequenceAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceAllocator").finish()
    }
}

impl SequenceAllocator {
    /// Creates a new allocator.
    pub fn new(counters: Arc<dyn CounterStore>, listings: Arc<dyn ListingStore>) -> Self {
        Self { counters, listings }
    }

    /// Atomically increments the named counter and returns the new value.
    ///
    /// An absent counter is lazily initialized to the maximum listing
    /// number already observed (0 when the collection is empty) before
    /// the increment, which makes initialization idempotent with respect
    /// to the startup reconciler having already seeded it.
    ///
    /// If the increment still cannot be confirmed afterwards, the
    /// allocator falls back to the current Unix timestamp. This is a
    /// best-effort uniqueness value, not a correctness guarantee, and is
    /// vulnerable to clock skew; it mirrors the documented behavior of
    /// the system this one replaces.
    pub async fn next(&self, name: &str) -> AppResult<i64> {
        if self.counters.get(name).await?.is_none() {
            let start = self.listings.max_no().await?.unwrap_or(0);
            info!(
                sequence = %name,
                start = start,
                "Counter absent, lazily initializing from observed maximum"
            );
            self.counters.init_if_absent(name, start).await?;
        }

        match self.counters.increment(name).await? {
            Some(value) => Ok(value),
            None => {
                let fallback = Utc::now().timestamp();
                warn!(
                    sequence = %name,
                    fallback = fallback,
                    "Counter increment could not be confirmed, falling back to wall-clock value"
                );
                Ok(fallback)
            }
        }
    }
}
