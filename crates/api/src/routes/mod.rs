pub mod customer;
pub mod health;
pub mod order;
pub mod server;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders/{page_index}/{page_size}    one page of orders, newest first
/// /orders/byState                     order totals per customer state
/// /orders/byCustomer/{n}              top n customers by spend
/// /orders/{id}                        single order with customer
///
/// /customers                          list (?limit=&offset=)
/// /customers/{id}                     get
///
/// /servers                            list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Order listing, aggregation and lookup.
        .nest("/orders", order::router())
        // Customer directory.
        .nest("/customers", customer::router())
        // Server inventory.
        .nest("/servers", server::router())
}
