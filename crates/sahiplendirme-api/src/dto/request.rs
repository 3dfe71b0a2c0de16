//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sahiplendirme_entity::listing::ListingFields;
use sahiplendirme_service::user::UserProfile;

/// Login form body (`application/x-www-form-urlencoded`).
///
/// The `username` field carries the email address; the field name follows
/// the OAuth2 password-grant convention the rest of the API client stack
/// expects.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Email address.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User payload for registration and admin create/update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Admin flag; absent means regular user.
    #[serde(default)]
    pub is_admin: bool,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<UserPayload> for UserProfile {
    fn from(payload: UserPayload) -> Self {
        UserProfile {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            is_admin: payload.is_admin,
            password: payload.password,
        }
    }
}

/// Listing payload for create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingPayload {
    /// Species (kedi, köpek, ...).
    #[validate(length(min = 1, message = "Species is required"))]
    pub tur: String,
    /// Breed.
    pub cins: String,
    /// Age.
    pub yas: String,
    /// Sex.
    pub cinsiyet: String,
    /// Health status.
    pub saglik_durumu: String,
    /// Temperament.
    pub karakter_ozellikleri: String,
    /// Location.
    pub bulundugu_yer: String,
    /// Contact details.
    pub iletisim: String,
    /// Back story.
    pub hikaye: String,
}

impl From<ListingPayload> for ListingFields {
    fn from(payload: ListingPayload) -> Self {
        ListingFields {
            tur: payload.tur,
            cins: payload.cins,
            yas: payload.yas,
            cinsiyet: payload.cinsiyet,
            saglik_durumu: payload.saglik_durumu,
            karakter_ozellikleri: payload.karakter_ozellikleri,
            bulundugu_yer: payload.bulundugu_yer,
            iletisim: payload.iletisim,
            hikaye: payload.hikaye,
        }
    }
}
