use axum::routing::get;
use axum::Router;

use crate::handlers::server;
use crate::state::AppState;

/// Routes mounted at `/servers`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(server::list))
}
