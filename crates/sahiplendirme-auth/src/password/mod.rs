//! Argon2id password hashing and verification.

mod vault;

pub use vault::PasswordVault;
