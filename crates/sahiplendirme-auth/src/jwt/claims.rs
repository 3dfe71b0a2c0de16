//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every access token.
///
/// Deliberately minimal: the subject is the user's email and validity is
/// determined solely by signature and expiry. There is no token id and no
/// role claim — the role is looked up fresh from the store on every
/// request, and tokens cannot be revoked server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the token subject (the user's email).
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Checks whether this token has expired. A token whose expiry equals
    /// the current instant counts as expired, so a zero-TTL token is
    /// never valid.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
