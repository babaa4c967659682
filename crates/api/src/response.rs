//! Shared response envelope types for API handlers.
//!
//! Resource listings and lookups use a `{ "data": ... }` envelope. The order
//! analytics endpoints return their documented shapes unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
