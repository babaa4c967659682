use advantage_db::repositories::{CustomerRepo, OrderRepo, ServerRepo};
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or empty.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether every collection holds data.
    pub seeded: bool,
}

/// GET /health -- returns service, database and seed health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = advantage_db::health_check(&state.pool).await.is_ok();
    let seeded = db_healthy && is_seeded(&state.pool).await.unwrap_or(false);

    let status = if seeded { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        seeded,
    })
}

async fn is_seeded(pool: &advantage_db::DbPool) -> Result<bool, sqlx::Error> {
    Ok(CustomerRepo::any(pool).await? && OrderRepo::any(pool).await? && ServerRepo::any(pool).await?)
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
