//! Handlers for the `/orders` resource.
//!
//! Read-only views over orders: a paged listing, totals per customer state,
//! the top customers by spend, and single-order lookup. Responses use the
//! documented shapes directly rather than the `{ data }` envelope.

use advantage_core::error::CoreError;
use advantage_core::pagination::{total_pages, Page, PageRequest};
use advantage_core::types::DbId;
use advantage_db::models::order::OrderWithCustomer;
use advantage_db::repositories::OrderRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

/// Response body for the paged order listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedOrdersResponse {
    pub page: Page<OrderWithCustomer>,
    pub total_pages: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/orders/{page_index}/{page_size}
///
/// One page of orders, newest first. `page_index` is 1-based; a page past the
/// last one is empty. Segments are taken raw so that non-numeric or
/// overflowing values report as pagination errors.
pub async fn list_page(
    State(state): State<AppState>,
    ApiPath((page_index, page_size)): ApiPath<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let request = PageRequest::parse(&page_index, &page_size)?;
    let result = OrderRepo::list_page(&state.pool, request).await?;

    tracing::debug!(
        page_index = request.index(),
        page_size = request.size(),
        returned = result.orders.len(),
        total_count = result.total_count,
        "Listed order page"
    );

    Ok(Json(PagedOrdersResponse {
        total_pages: total_pages(result.total_count, request.size()),
        page: Page {
            index: request.index(),
            size: request.size(),
            items: result.orders,
        },
    }))
}

/// GET /api/v1/orders/byState
///
/// Sum of order totals per customer state, largest first.
pub async fn totals_by_state(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let totals = OrderRepo::totals_by_state(&state.pool).await?;
    Ok(Json(totals))
}

/// GET /api/v1/orders/byCustomer/{n}
///
/// The `n` customers with the highest summed order totals.
pub async fn top_customers(
    State(state): State<AppState>,
    ApiPath(n): ApiPath<i64>,
) -> AppResult<impl IntoResponse> {
    if n < 0 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "customer count must not be negative, got {n}"
        ))));
    }
    let customers = OrderRepo::top_customers_by_spend(&state.pool, n).await?;
    Ok(Json(customers))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}
