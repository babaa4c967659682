use advantage_db::repositories::ServerRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/servers
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let servers = ServerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: servers }))
}
