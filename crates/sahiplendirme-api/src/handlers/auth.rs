//! Auth handlers — register, login, me.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use validator::Validate;

use sahiplendirme_core::error::AppError;

use crate::error::ApiError;

use crate::dto::request::{LoginForm, UserPayload};
use crate::dto::response::{LoginResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Open endpoint: anyone may create an account. The admin flag in the
/// payload is honored, matching the admin-bootstrap flow where the first
/// administrator registers itself.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login
///
/// Form-encoded credentials; `username` carries the email address.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<LoginResponse>, ApiError> {
    form.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.gate.authenticate(&form.username, &form.password).await?;
    let (access_token, _expires_at) = state.encoder.issue(&user.email)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.0))
}
