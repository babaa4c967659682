//! Integration tests for the startup seeder.

use advantage_core::error::CoreError;
use advantage_core::generator::{derive_email, CustomerSeed, NAME_CAPACITY};
use advantage_db::repositories::{CustomerRepo, OrderRepo, ServerRepo};
use advantage_db::seed::{seed, SeedError, SeedOptions, SeedReport};
use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;

fn options(customer_count: usize, order_count: usize) -> SeedOptions {
    SeedOptions {
        customer_count,
        order_count,
    }
}

async fn counts(pool: &PgPool) -> (i64, i64, i64) {
    (
        CustomerRepo::count(pool).await.unwrap(),
        OrderRepo::count(pool).await.unwrap(),
        ServerRepo::count(pool).await.unwrap(),
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeds_every_empty_collection(pool: PgPool) {
    let mut rng = StdRng::seed_from_u64(1);

    let report = seed(&pool, &options(5, 20), &mut rng).await.unwrap();

    assert_eq!(
        report,
        SeedReport {
            customers: 5,
            orders: 20,
            servers: 9,
        }
    );
    assert_eq!(counts(&pool).await, (5, 20, 9));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reseeding_is_a_no_op(pool: PgPool) {
    let mut rng = StdRng::seed_from_u64(2);

    seed(&pool, &options(5, 20), &mut rng).await.unwrap();
    let before = counts(&pool).await;

    let report = seed(&pool, &options(5, 20), &mut rng).await.unwrap();

    assert_eq!(report, SeedReport::default());
    assert_eq!(counts(&pool).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn collections_are_checked_independently(pool: PgPool) {
    CustomerRepo::insert_many(
        &pool,
        &[CustomerSeed {
            id: 1,
            name: "AZ".to_string(),
            email: derive_email("AZ"),
            state: "CA".to_string(),
        }],
    )
    .await
    .unwrap();

    let report = seed(&pool, &options(5, 12), &mut StdRng::seed_from_u64(3))
        .await
        .unwrap();

    assert_eq!(report.customers, 0);
    assert_eq!(report.orders, 12);
    assert_eq!(report.servers, 9);

    // Only the pre-existing customer can be referenced.
    let top = OrderRepo::top_customers_by_spend(&pool, 10).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "AZ");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_orders_reference_seeded_customers(pool: PgPool) {
    seed(&pool, &options(4, 50), &mut StdRng::seed_from_u64(4))
        .await
        .unwrap();

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM orders o LEFT JOIN customers c ON c.id = o.customer_id \
         WHERE c.id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans, 0);

    let ids = CustomerRepo::list_ids(&pool).await.unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn too_many_customers_aborts_without_writing(pool: PgPool) {
    let result = seed(
        &pool,
        &options(NAME_CAPACITY + 1, 10),
        &mut StdRng::seed_from_u64(5),
    )
    .await;

    assert_matches!(
        result,
        Err(SeedError::Generation(CoreError::NameSpaceExhausted { .. }))
    );
    assert_eq!(counts(&pool).await, (0, 0, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn servers_match_static_inventory(pool: PgPool) {
    seed(&pool, &options(1, 1), &mut StdRng::seed_from_u64(6))
        .await
        .unwrap();

    let servers = ServerRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Dev_Web",
            "Dev_Mail",
            "Dev_Services",
            "QA_Web",
            "QA_Mail",
            "QA_Services",
            "Prod_Web",
            "Prod_Mail",
            "Prod_Services",
        ]
    );
    assert!(!servers[1].is_online);
    assert!(servers.iter().filter(|s| s.is_online).count() == 8);
}
