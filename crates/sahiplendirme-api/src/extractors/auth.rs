//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and resolves the caller's current user record.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use sahiplendirme_core::error::AppError;

use crate::error::ApiError;
use sahiplendirme_entity::User;

use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// The record is read fresh from the store on every request, so role
/// changes and deletions take effect immediately regardless of what the
/// token was issued with.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let user = state.gate.current_user(token).await?;

        Ok(AuthUser(user))
    }
}
