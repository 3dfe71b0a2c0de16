//! Listing CRUD orchestration.

mod service;

pub use service::ListingService;
