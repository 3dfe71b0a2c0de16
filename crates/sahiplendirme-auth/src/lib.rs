//! # sahiplendirme-auth
//!
//! Credential and session-token subsystem.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — signed, time-limited bearer tokens (subject = email)
//! - `gate` — credential authentication, token resolution, and the
//!   two-tier permission policy

pub mod gate;
pub mod jwt;
pub mod password;

pub use gate::{AuthGate, ListingAction};
pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordVault;
