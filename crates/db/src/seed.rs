//! One-time population of an empty store with generated sample data.
//!
//! Each collection is checked and seeded independently: a collection that
//! already holds rows is left untouched, so running the seeder again is a
//! no-op. Customers are seeded before orders because every order references
//! a customer already in the store.

use advantage_core::error::CoreError;
use advantage_core::generator;
use chrono::Utc;
use rand::Rng;
use sqlx::PgPool;

use crate::repositories::{CustomerRepo, OrderRepo, ServerRepo};

/// How many rows to generate for the randomized collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub customer_count: usize,
    pub order_count: usize,
}

/// Rows inserted per collection; zero for collections that were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: u64,
    pub orders: u64,
    pub servers: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The generator could not produce the requested data, e.g. more
    /// customers were requested than there are unique names.
    #[error("Seed data generation failed: {0}")]
    Generation(#[from] CoreError),

    #[error("Database error while seeding: {0}")]
    Database(#[from] sqlx::Error),
}

/// Seed every empty collection.
pub async fn seed<R: Rng + ?Sized>(
    pool: &PgPool,
    options: &SeedOptions,
    rng: &mut R,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    if CustomerRepo::any(pool).await? {
        tracing::debug!("Customers already present, skipping");
    } else {
        let customers = generator::generate_customers(rng, options.customer_count)?;
        report.customers = CustomerRepo::insert_many(pool, &customers).await?;
        tracing::info!(count = report.customers, "Seeded customers");
    }

    if OrderRepo::any(pool).await? {
        tracing::debug!("Orders already present, skipping");
    } else {
        let customer_ids = CustomerRepo::list_ids(pool).await?;
        let orders =
            generator::generate_orders(rng, options.order_count, &customer_ids, Utc::now())?;
        report.orders = OrderRepo::insert_many(pool, &orders).await?;
        tracing::info!(count = report.orders, "Seeded orders");
    }

    if ServerRepo::any(pool).await? {
        tracing::debug!("Servers already present, skipping");
    } else {
        report.servers = ServerRepo::insert_many(pool, &generator::seed_servers()).await?;
        tracing::info!(count = report.servers, "Seeded servers");
    }

    Ok(report)
}
