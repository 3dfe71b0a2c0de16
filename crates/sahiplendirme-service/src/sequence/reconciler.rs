//! One-time startup reconciliation of the listings collection.
//!
//! Re-establishes the listing number uniqueness invariant over data that
//! may pre-date it: records without a number, duplicated numbers, and a
//! counter that lags behind the observed maximum.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::listing::ILAN_NO_SENTINEL;
use sahiplendirme_store::{CounterStore, ListingStore};

use crate::ILAN_SEQUENCE;

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Total records scanned.
    pub scanned: usize,
    /// Records that received a new listing number.
    pub reassigned: usize,
    /// The final running maximum, also the seeded counter value.
    pub max_no: i64,
}

/// Runs the startup repair routine.
///
/// Must complete before the server accepts any traffic; reconciliation is
/// the single-writer phase and no concurrent access to the listings
/// collection is permitted during it.
#[derive(Clone)]
pub struct StoreReconciler {
    /// Listing collection.
    listings: Arc<dyn ListingStore>,
    /// Counter collection.
    counters: Arc<dyn CounterStore>,
}

impl std::fmt::Debug for StoreReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreReconciler").finish()
    }
}

impl StoreReconciler {
    /// Creates a new reconciler.
    pub fn new(listings: Arc<dyn ListingStore>, counters: Arc<dyn CounterStore>) -> Self {
        Self { listings, counters }
    }

    /// Performs a full reconciliation cycle:
    ///
    /// 1. Drop the uniqueness index (absent index tolerated).
    /// 2. Scan all records; track seen numbers and the running maximum,
    ///    sentinel-mark records that lack a number.
    /// 3. Reassign strictly increasing numbers past the maximum to every
    ///    sentinel record and to every member after the first of each
    ///    duplicated group.
    /// 4. Seed the `ilan_id` counter with the final maximum.
    /// 5. Re-create the uniqueness index.
    ///
    /// Any store error aborts the routine; the caller must treat that as
    /// fatal and refuse to serve requests. Running twice in a row on an
    /// already-consistent collection reassigns nothing.
    pub async fn run(&self) -> AppResult<ReconcileReport> {
        info!("Starting listing store reconciliation");

        self.listings.drop_no_index().await?;

        let records = self.listings.list().await?;
        let scanned = records.len();

        let mut max_no: i64 = 0;
        let mut groups: Vec<(i64, Vec<Uuid>)> = Vec::new();
        let mut index: HashMap<i64, usize> = HashMap::new();

        for record in &records {
            let no = match record.ilan_no {
                Some(no) if no != ILAN_NO_SENTINEL => {
                    max_no = max_no.max(no);
                    no
                }
                _ => {
                    // Pending reassignment; mirror the stored sentinel so a
                    // crash mid-run leaves the record visibly unassigned.
                    self.listings.set_no(record.id, ILAN_NO_SENTINEL).await?;
                    ILAN_NO_SENTINEL
                }
            };

            match index.get(&no) {
                Some(&slot) => groups[slot].1.push(record.id),
                None => {
                    index.insert(no, groups.len());
                    groups.push((no, vec![record.id]));
                }
            }
        }

        let mut reassigned = 0;
        for (no, members) in &groups {
            // Sentinel records are all pending; for a real value the first
            // holder keeps its number.
            let skip = if *no == ILAN_NO_SENTINEL { 0 } else { 1 };
            for id in members.iter().skip(skip) {
                max_no += 1;
                self.listings.set_no(*id, max_no).await?;
                reassigned += 1;
            }
        }

        if reassigned > 0 {
            warn!(
                reassigned = reassigned,
                "Reassigned listing numbers to restore uniqueness"
            );
        }

        self.counters.set(ILAN_SEQUENCE, max_no).await?;

        self.listings.create_no_index().await?;

        info!(
            scanned = scanned,
            reassigned = reassigned,
            max_no = max_no,
            "Listing store reconciliation complete"
        );

        Ok(ReconcileReport {
            scanned,
            reassigned,
            max_no,
        })
    }
}
