//! # sahiplendirme-entity
//!
//! Domain models for the Sahiplendirme backend: users, listings, and the
//! named sequence counter.

pub mod counter;
pub mod listing;
pub mod user;

pub use counter::SequenceCounter;
pub use listing::Listing;
pub use user::User;
