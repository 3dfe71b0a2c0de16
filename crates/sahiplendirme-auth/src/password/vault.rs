//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use sahiplendirme_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// Pure and stateless: safe to call from arbitrarily many concurrent
/// requests without coordination.
#[derive(Debug, Clone)]
pub struct PasswordVault;

impl PasswordVault {
    /// Creates a new password vault instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// The default Argon2id parameters put a single hash in the ~100ms
    /// range on commodity hardware. Empty passwords are rejected.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        if password.is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id digest.
    ///
    /// Returns `false` on mismatch and on any malformed digest; a broken
    /// stored hash must read as "wrong password", never as a server error.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(digest) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordVault {
    fn default() -> Self {
        Self::new()
    }
}
