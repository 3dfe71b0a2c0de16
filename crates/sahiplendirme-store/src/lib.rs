//! # sahiplendirme-store
//!
//! Document store seam for the Sahiplendirme backend.
//!
//! The domain layers talk to the [`traits`] only; two backends implement
//! them:
//!
//! - [`postgres`] — the production backend over a sqlx connection pool
//! - [`memory`] — a mutex-guarded in-memory backend for single-node tests
//!
//! Atomicity guarantees (counter increment, unique index) are provided by
//! each backend; no in-process locking is used above this seam.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod traits;

pub use connection::StorePool;
pub use memory::MemoryStore;
pub use traits::{CounterStore, ListingStore, UserStore};
