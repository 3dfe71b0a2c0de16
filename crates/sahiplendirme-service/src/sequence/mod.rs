//! Sequence number allocation and startup store reconciliation.

mod allocator;
mod reconciler;

pub use allocator::SequenceAllocator;
pub use reconciler::{ReconcileReport, StoreReconciler};
