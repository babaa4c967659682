//! Repository for the `customers` table.

use advantage_core::generator::CustomerSeed;
use advantage_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::repositories::{values_clause, INSERT_CHUNK_ROWS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, state";

/// Provides insert and read operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert generated customers in one transaction, returning the row count.
    pub async fn insert_many(pool: &PgPool, customers: &[CustomerSeed]) -> Result<u64, sqlx::Error> {
        if customers.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for chunk in customers.chunks(INSERT_CHUNK_ROWS) {
            let query = format!(
                "INSERT INTO customers ({COLUMNS}) VALUES {}",
                values_clause(chunk.len(), 4)
            );
            let mut q = sqlx::query(&query);
            for customer in chunk {
                q = q
                    .bind(customer.id)
                    .bind(&customer.name)
                    .bind(&customer.email)
                    .bind(&customer.state);
            }
            inserted += q.execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Whether at least one customer exists.
    pub async fn any(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers)")
            .fetch_one(pool)
            .await
    }

    /// Total number of customers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await
    }

    /// All customer ids, ascending.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM customers ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers ordered by id.
    ///
    /// Callers clamp `limit` and `offset` via
    /// [`advantage_core::pagination::clamp_limit`] / `clamp_offset`.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Customer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
