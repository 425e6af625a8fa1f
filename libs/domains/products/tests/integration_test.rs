//! PostgreSQL integration tests for the products repository.
//!
//! Each test gets its own container from `TestDatabase`. Run with
//! `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use test_utils::assertions::{assert_price_eq, assert_some};
use test_utils::{TestDataBuilder, TestDatabase};

fn product(id: i64, name: String, price: f64) -> Product {
    Product {
        product_id: id,
        name,
        description: "integration".to_string(),
        price,
        currency_code: "USD".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_insert_find");

    let id = builder.product_id("main");
    repo.insert(product(id, builder.name("product", "main"), 12.34))
        .await
        .unwrap();

    let found = assert_some(repo.find_by_id(id).await.unwrap(), "inserted product");
    assert_eq!(found.name, builder.name("product", "main"));
    assert_price_eq(found.price, 12.34, "inserted product");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_insert_is_rejected() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_duplicate");

    let id = builder.product_id("dup");
    repo.insert(product(id, "first".to_string(), 1.0))
        .await
        .unwrap();

    let result = repo.insert(product(id, "second".to_string(), 2.0)).await;
    assert!(matches!(result, Err(ProductError::Duplicate(dup)) if dup == id));

    let stored = assert_some(repo.find_by_id(id).await.unwrap(), "first product");
    assert_eq!(stored.name, "first");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update_delete");

    let id = builder.product_id("ud");
    repo.insert(product(id, "before".to_string(), 5.0))
        .await
        .unwrap();

    assert!(
        repo.update(product(id, "after".to_string(), 6.5))
            .await
            .unwrap()
    );
    let updated = assert_some(repo.find_by_id(id).await.unwrap(), "updated product");
    assert_eq!(updated.name, "after");
    assert_price_eq(updated.price, 6.5, "updated product");

    assert!(
        !repo
            .update(product(builder.product_id("missing"), "x".to_string(), 1.0))
            .await
            .unwrap()
    );

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_orders_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    for id in [30, 10, 20] {
        repo.insert(product(id, format!("p{id}"), 1.0)).await.unwrap();
    }

    let ids: Vec<i64> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_over_postgres() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    service
        .create_product(product(1, "Chair".to_string(), 49.0))
        .await
        .unwrap();

    let existing = assert_some(service.find_product_by_id(1).await.unwrap(), "chair");
    service
        .update_product(product(1, "Armchair".to_string(), 89.0), existing)
        .await
        .unwrap();

    let existing = assert_some(service.find_product_by_id(1).await.unwrap(), "armchair");
    assert_eq!(existing.name, "Armchair");

    service.delete_product(existing).await.unwrap();
    assert!(service.find_product_by_id(1).await.unwrap().is_none());
}
