//! Route definitions for orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET /byState                  -> totals_by_state
/// GET /byCustomer/{n}           -> top_customers
/// GET /{id}                     -> get_by_id
/// GET /{id}/{page_size}         -> list_page ({id} is the 1-based page index)
/// ```
///
/// The router allows one parameter name per path position, so the paging
/// route reuses `{id}` for its first segment.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/byState", get(order::totals_by_state))
        .route("/byCustomer/{n}", get(order::top_customers))
        .route("/{id}", get(order::get_by_id))
        .route("/{id}/{page_size}", get(order::list_page))
}
