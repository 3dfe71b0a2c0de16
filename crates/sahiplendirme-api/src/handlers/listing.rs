//! Listing handlers — CRUD keyed by the public listing number.
//!
//! Each handler names its intent with an explicit `ListingAction`; the
//! gate decides access from that, never from the HTTP method.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use sahiplendirme_auth::ListingAction;
use sahiplendirme_core::error::AppError;

use crate::error::ApiError;
use sahiplendirme_entity::Listing;

use crate::dto::request::ListingPayload;
use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/ilanlar
pub async fn list_listings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Listing>>, ApiError> {
    state.gate.require_listing_access(&auth, ListingAction::Read)?;
    let listings = state.listing_service.list().await?;
    Ok(Json(listings))
}

/// GET /api/ilanlar/{ilan_no}
pub async fn get_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ilan_no): Path<i64>,
) -> Result<Json<Listing>, ApiError> {
    state.gate.require_listing_access(&auth, ListingAction::Read)?;
    let listing = state.listing_service.get(ilan_no).await?;
    Ok(Json(listing))
}

/// POST /api/ilanlar
pub async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ListingPayload>,
) -> Result<(StatusCode, Json<Listing>), ApiError> {
    state
        .gate
        .require_listing_access(&auth, ListingAction::Write)?;
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let listing = state
        .listing_service
        .create(&auth, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// PUT /api/ilanlar/{ilan_no}
pub async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ilan_no): Path<i64>,
    Json(payload): Json<ListingPayload>,
) -> Result<Json<Listing>, ApiError> {
    state
        .gate
        .require_listing_access(&auth, ListingAction::Write)?;
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let listing = state
        .listing_service
        .update(&auth, ilan_no, payload.into())
        .await?;

    Ok(Json(listing))
}

/// DELETE /api/ilanlar/{ilan_no}
pub async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ilan_no): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .gate
        .require_listing_access(&auth, ListingAction::Write)?;

    state.listing_service.delete(ilan_no).await?;

    Ok(Json(MessageResponse {
        message: format!("Listing {ilan_no} deleted"),
    }))
}
