//! Repository for the `orders` table.
//!
//! Read operations always join the owning customer. Aggregations run in SQL;
//! their ordering is total descending with a deterministic tiebreak.

use advantage_core::generator::OrderSeed;
use advantage_core::pagination::PageRequest;
use advantage_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::order::{
    CustomerSpend, OrderPage, OrderWithCustomer, OrderWithCustomerRow, StateTotal,
};
use crate::repositories::{values_clause, INSERT_CHUNK_ROWS};

/// Column list for inserts.
const INSERT_COLUMNS: &str = "id, customer_id, total, placed, completed";

/// Column list for `orders o JOIN customers c`, matching `OrderWithCustomerRow`.
const JOINED_COLUMNS: &str = "\
    o.id, o.total, o.placed, o.completed, \
    c.id AS customer_id, c.name AS customer_name, \
    c.email AS customer_email, c.state AS customer_state";

/// Provides insert, lookup, paging and aggregation for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert generated orders in one transaction, returning the row count.
    pub async fn insert_many(pool: &PgPool, orders: &[OrderSeed]) -> Result<u64, sqlx::Error> {
        if orders.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for chunk in orders.chunks(INSERT_CHUNK_ROWS) {
            let query = format!(
                "INSERT INTO orders ({INSERT_COLUMNS}) VALUES {}",
                values_clause(chunk.len(), 5)
            );
            let mut q = sqlx::query(&query);
            for order in chunk {
                q = q
                    .bind(order.id)
                    .bind(order.customer_id)
                    .bind(order.total)
                    .bind(order.placed)
                    .bind(order.completed);
            }
            inserted += q.execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Whether at least one order exists.
    pub async fn any(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM orders)")
            .fetch_one(pool)
            .await
    }

    /// Total number of orders.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await
    }

    /// Find an order with its customer attached.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrderWithCustomer>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o \
             JOIN customers c ON c.id = o.customer_id \
             WHERE o.id = $1"
        );
        let row = sqlx::query_as::<_, OrderWithCustomerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(OrderWithCustomer::from))
    }

    /// Read one page of orders, newest first, plus the total order count.
    ///
    /// The count and the page are read in a single read-only
    /// `REPEATABLE READ` transaction so both see the same snapshot.
    pub async fn list_page(pool: &PgPool, page: PageRequest) -> Result<OrderPage, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o \
             JOIN customers c ON c.id = o.customer_id \
             ORDER BY o.placed DESC, o.id DESC \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, OrderWithCustomerRow>(&query)
            .bind(page.size())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(OrderPage {
            orders: rows.into_iter().map(OrderWithCustomer::from).collect(),
            total_count,
        })
    }

    /// Sum order totals per customer state.
    ///
    /// Ordered by total descending, then state code ascending. States with
    /// no orders do not appear.
    pub async fn totals_by_state(pool: &PgPool) -> Result<Vec<StateTotal>, sqlx::Error> {
        sqlx::query_as::<_, StateTotal>(
            "SELECT c.state, SUM(o.total)::BIGINT AS total \
             FROM orders o \
             JOIN customers c ON c.id = o.customer_id \
             GROUP BY c.state \
             ORDER BY SUM(o.total) DESC, c.state ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// The `limit` customers with the highest summed order totals.
    ///
    /// Ordered by total descending, then customer id ascending. Customers
    /// without orders do not appear.
    pub async fn top_customers_by_spend(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<CustomerSpend>, sqlx::Error> {
        sqlx::query_as::<_, CustomerSpend>(
            "SELECT c.name, SUM(o.total)::BIGINT AS total \
             FROM orders o \
             JOIN customers c ON c.id = o.customer_id \
             GROUP BY c.id, c.name \
             ORDER BY SUM(o.total) DESC, c.id ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

/// Open a read-only transaction whose queries all see one snapshot.
pub(crate) async fn begin_snapshot(
    pool: &PgPool,
) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advantage_core::generator::{derive_email, CustomerSeed};
    use chrono::{TimeZone, Utc};

    use crate::repositories::CustomerRepo;

    fn order(id: DbId) -> OrderSeed {
        OrderSeed {
            id,
            customer_id: 1,
            total: 100,
            placed: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            completed: None,
        }
    }

    async fn insert_customer(pool: &PgPool) {
        let customer = CustomerSeed {
            id: 1,
            name: "AZ".to_string(),
            email: derive_email("AZ"),
            state: "CA".to_string(),
        };
        CustomerRepo::insert_many(pool, &[customer]).await.unwrap();
    }

    #[sqlx::test(migrations = "../../db/migrations")]
    async fn snapshot_is_repeatable_read_and_read_only(pool: PgPool) {
        let mut tx = begin_snapshot(&pool).await.unwrap();

        let isolation: String = sqlx::query_scalar("SHOW transaction_isolation")
            .fetch_one(&mut *tx)
            .await
            .unwrap();
        let read_only: String = sqlx::query_scalar("SHOW transaction_read_only")
            .fetch_one(&mut *tx)
            .await
            .unwrap();

        assert_eq!(isolation, "repeatable read");
        assert_eq!(read_only, "on");
    }

    #[sqlx::test(migrations = "../../db/migrations")]
    async fn snapshot_ignores_orders_committed_after_first_read(pool: PgPool) {
        insert_customer(&pool).await;
        OrderRepo::insert_many(&pool, &[order(1), order(2)])
            .await
            .unwrap();

        let mut tx = begin_snapshot(&pool).await.unwrap();
        let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *tx)
            .await
            .unwrap();

        OrderRepo::insert_many(&pool, &[order(3)]).await.unwrap();

        let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(before, 2);
        assert_eq!(after, 2);
        assert_eq!(OrderRepo::count(&pool).await.unwrap(), 3);
    }
}
