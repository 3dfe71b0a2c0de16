//! Admin user-management handlers, keyed by record id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use sahiplendirme_core::error::AppError;

use crate::error::ApiError;

use crate::dto::request::UserPayload;
use crate::dto::response::UserResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Parses the path segment into a user id; malformed ids are the
/// caller's fault, not a missing record.
fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::validation(format!("Invalid user id: {raw}")).into())
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    state.gate.require_admin(&auth)?;
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    state.gate.require_admin(&auth)?;
    let id = parse_user_id(&id)?;
    let user = state.user_service.get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    state.gate.require_admin(&auth)?;
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.register(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    state.gate.require_admin(&auth)?;
    let id = parse_user_id(&id)?;
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.update(id, payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.gate.require_admin(&auth)?;
    let id = parse_user_id(&id)?;
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
