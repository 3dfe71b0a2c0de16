//! # sahiplendirme-service
//!
//! Domain services: sequence allocation and store reconciliation, plus
//! listing and user CRUD orchestration.

pub mod listing;
pub mod sequence;
pub mod user;

pub use listing::ListingService;
pub use sequence::{ReconcileReport, SequenceAllocator, StoreReconciler};
pub use user::{UserProfile, UserService};

/// Name of the listing number sequence.
pub const ILAN_SEQUENCE: &str = "ilan_id";
