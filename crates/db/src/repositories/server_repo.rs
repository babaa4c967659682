//! Repository for the `servers` table.

use advantage_core::generator::ServerSeed;
use sqlx::PgPool;

use crate::models::server::Server;
use crate::repositories::values_clause;

const COLUMNS: &str = "id, name, is_online";

/// Provides insert and read operations for the server inventory.
pub struct ServerRepo;

impl ServerRepo {
    /// Insert the server inventory, returning the row count.
    ///
    /// The inventory is small and fixed, so a single statement suffices.
    pub async fn insert_many(pool: &PgPool, servers: &[ServerSeed]) -> Result<u64, sqlx::Error> {
        if servers.is_empty() {
            return Ok(0);
        }

        let query = format!(
            "INSERT INTO servers ({COLUMNS}) VALUES {}",
            values_clause(servers.len(), 3)
        );
        let mut q = sqlx::query(&query);
        for server in servers {
            q = q.bind(server.id).bind(&server.name).bind(server.is_online);
        }
        Ok(q.execute(pool).await?.rows_affected())
    }

    /// Whether at least one server exists.
    pub async fn any(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM servers)")
            .fetch_one(pool)
            .await
    }

    /// Total number of servers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM servers")
            .fetch_one(pool)
            .await
    }

    /// List all servers ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Server>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM servers ORDER BY id");
        sqlx::query_as::<_, Server>(&query).fetch_all(pool).await
    }
}
