//! Health check handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use sahiplendirme_service::ILAN_SEQUENCE;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// The store field reflects a cheap read through the counter collection.
/// A failed probe degrades the whole response, body and status code both,
/// so monitors treat a down store as unhealthy.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.counters.get(ILAN_SEQUENCE).await {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable"),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            store: store.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
