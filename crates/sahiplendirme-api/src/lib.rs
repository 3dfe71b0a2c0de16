//! # sahiplendirme-api
//!
//! HTTP API layer built on Axum.
//!
//! Provides the REST endpoints for authentication, listing CRUD, and
//! admin user management, plus extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
