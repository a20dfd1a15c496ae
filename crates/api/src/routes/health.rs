use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the record store is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the movies database answered the probe query.
    pub db_healthy: bool,
}

/// GET /health
///
/// 200 when the SQLite store answers, 503 otherwise so load balancers and
/// orchestrators stop routing movie traffic to this instance.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, db_healthy) = match marquee_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok", true),
        Err(e) => {
            tracing::warn!(error = %e, "Movie store health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", false)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
