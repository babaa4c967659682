//! Customer entity model.

use advantage_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub state: String,
}
