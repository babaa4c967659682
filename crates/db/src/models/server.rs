use advantage_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `servers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Server {
    pub id: DbId,
    pub name: String,
    pub is_online: bool,
}
