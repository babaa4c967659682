//! Handlers for the `/customers` resource.

use advantage_core::error::CoreError;
use advantage_core::pagination::{clamp_limit, clamp_offset};
use advantage_core::types::DbId;
use advantage_db::repositories::CustomerRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/customers?limit=50&offset=0
///
/// List customers ordered by id.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let customers = CustomerRepo::list(
        &state.pool,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: customers }))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(DataResponse { data: customer }))
}
