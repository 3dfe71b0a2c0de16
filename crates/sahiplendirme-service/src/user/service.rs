//! User registration and admin-only CRUD.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use sahiplendirme_auth::PasswordVault;
use sahiplendirme_core::error::AppError;
use sahiplendirme_core::result::AppResult;
use sahiplendirme_entity::user::NewUser;
use sahiplendirme_entity::User;
use sahiplendirme_store::UserStore;

/// Profile fields plus plaintext password, as received from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Admin flag. Defaults to false when omitted.
    #[serde(default)]
    pub is_admin: bool,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Handles user registration and admin management.
#[derive(Clone)]
pub struct UserService {
    /// User collection.
    users: Arc<dyn UserStore>,
    /// Password hashing.
    vault: Arc<PasswordVault>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, vault: Arc<PasswordVault>) -> Self {
        Self { users, vault }
    }

    /// Registers a new user.
    ///
    /// Email uniqueness is enforced here at write time, not by the store
    /// schema; a duplicate surfaces as a validation error.
    pub async fn register(&self, profile: UserProfile) -> AppResult<User> {
        if self.users.find_by_email(&profile.email).await?.is_some() {
            return Err(AppError::validation("Email address is already in use"));
        }

        let password_hash = self.vault.hash(&profile.password)?;
        let user = self
            .users
            .insert(NewUser {
                first_name: profile.first_name,
                last_name: profile.last_name,
                email: profile.email,
                phone: profile.phone,
                is_admin: profile.is_admin,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Lists all users (admin only at the boundary).
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Fetches a user by record id.
    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Replaces a user's profile, re-hashing the supplied password.
    ///
    /// When the email changes, the new address must not belong to
    /// another user.
    pub async fn update(&self, id: Uuid, profile: UserProfile) -> AppResult<User> {
        let existing = self.get(id).await?;

        if profile.email != existing.email
            && self.users.find_by_email(&profile.email).await?.is_some()
        {
            return Err(AppError::validation("Email address is already in use"));
        }

        let password_hash = self.vault.hash(&profile.password)?;
        let updated = self
            .users
            .update(
                id,
                NewUser {
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    email: profile.email,
                    phone: profile.phone,
                    is_admin: profile.is_admin,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, "User updated");
        Ok(updated)
    }

    /// Deletes a user by record id.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.users.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
