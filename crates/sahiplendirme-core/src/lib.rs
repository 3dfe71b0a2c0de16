//! # sahiplendirme-core
//!
//! Core crate for the Sahiplendirme listing backend. Contains the unified
//! error system, result alias, and configuration schemas.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
