//! Credential authentication, token resolution, and the two-tier
//! permission policy.

use std::sync::Arc;

use tracing::debug;

use sahiplendirme_core::error::AppError;
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::User;
use sahiplendirme_store::UserStore;

use crate::jwt::TokenDecoder;
use crate::password::PasswordVault;

/// What the caller intends to do with the listings collection.
///
/// Decided by the routing layer and passed in explicitly; the gate never
/// inspects transport-level concepts like the HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingAction {
    /// Read-only access (list, fetch).
    Read,
    /// Mutating access (create, update, delete).
    Write,
}

/// Composes the password vault, token decoder, and user lookup into the
/// authentication and authorization entry point for every request.
#[derive(Clone)]
pub struct AuthGate {
    /// User lookup.
    users: Arc<dyn UserStore>,
    /// Password verification.
    vault: Arc<PasswordVault>,
    /// Token validation.
    decoder: Arc<TokenDecoder>,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate").finish()
    }
}

impl AuthGate {
    /// Creates a new gate.
    pub fn new(
        users: Arc<dyn UserStore>,
        vault: Arc<PasswordVault>,
        decoder: Arc<TokenDecoder>,
    ) -> Self {
        Self {
            users,
            vault,
            decoder,
        }
    }

    /// Authenticates an email + password pair.
    ///
    /// Returns the user record for token issuance by the caller. An
    /// unknown email and a wrong password produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.vault.verify(password, &user.password_hash) {
            debug!(email = %email, "Password verification failed");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        Ok(user)
    }

    /// Resolves the caller from a bearer token.
    ///
    /// The role and profile are always read fresh from the store: a user
    /// deleted after issuance fails the lookup here even though the token
    /// itself is still cryptographically valid, and a demoted admin loses
    /// admin access on the next request.
    pub async fn current_user(&self, token: &str) -> AppResult<User> {
        let claims = self
            .decoder
            .resolve(token)
            .map_err(|_| AppError::unauthorized("Invalid credentials"))?;

        self.users
            .find_by_email(claims.subject())
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))
    }

    /// Requires admin privileges.
    pub fn require_admin(&self, user: &User) -> AppResult<()> {
        if !user.is_admin {
            return Err(AppError::forbidden(
                "Administrator privileges are required for this operation",
            ));
        }
        Ok(())
    }

    /// Enforces the two-tier listing policy: admins may do anything,
    /// regular users may only read.
    pub fn require_listing_access(&self, user: &User, action: ListingAction) -> AppResult<()> {
        if user.is_admin {
            return Ok(());
        }

        match action {
            ListingAction::Read => Ok(()),
            ListingAction::Write => Err(AppError::forbidden(
                "Administrator privileges are required; regular users may only view listings",
            )),
        }
    }
}
