// Atomicity of the paired writes: a failure in the second statement
// must leave no trace of the first.

use brewlog_core::application::CatalogService;
use brewlog_core::domain::{CoffeeUpdate, LocationUpdate, NewCoffee, NewLocation};
use brewlog_core::port::TransactionalCoffeeRepository;
use brewlog_core::AppError;
use brewlog_infra_sqlite::{create_pool, run_migrations, SqliteCoffeeRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

async fn setup() -> (CatalogService, Arc<SqliteCoffeeRepository>, SqlitePool) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let repo = Arc::new(SqliteCoffeeRepository::new(pool.clone()));
    let service = CatalogService::new(repo.clone(), repo.clone());
    (service, repo, pool)
}

fn sample_input() -> NewCoffee {
    NewCoffee {
        name: "Espresso".to_string(),
        place: "Blue Bottle".to_string(),
        rating: 5,
        coffee_type: "espresso".to_string(),
        notes: String::new(),
        location: NewLocation {
            address: "1 Main St".to_string(),
            city: "Oakland".to_string(),
            latitude: 37.8,
            longitude: -122.27,
        },
    }
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_failed_coffee_insert_leaves_no_orphan_location() {
    let (_service, repo, pool) = setup().await;
    let input = sample_input();

    let mut tx = repo.begin_transaction().await.unwrap();
    let location = tx
        .insert_location(&input.place, &input.location)
        .await
        .unwrap();
    assert!(location.id > 0);

    // Second statement fails: nonexistent location_id violates the FK
    let err = tx.insert_coffee(&input, 424242).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
    tx.rollback().await.unwrap();

    // The location insert must not be observable afterwards
    assert_eq!(count(&pool, "place_location").await, 0);
    assert_eq!(count(&pool, "coffee").await, 0);
}

#[tokio::test]
async fn test_update_of_missing_coffee_rolls_back_location_update() {
    let (service, _repo, pool) = setup().await;
    let coffee = service.create(sample_input()).await.unwrap();

    // Valid location id, nonexistent coffee id: the location update
    // affects a row, the coffee update affects none
    let update = CoffeeUpdate {
        name: "Espresso".to_string(),
        place: "Renamed Cafe".to_string(),
        rating: 1,
        coffee_type: "espresso".to_string(),
        notes: String::new(),
        location: LocationUpdate {
            id: coffee.location_id,
            address: "99 Elsewhere Ave".to_string(),
            city: "Nowhere".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        },
    };

    let err = service.update(999, update).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Pre-update values survive for both entities
    let view = service.get(coffee.id).await.unwrap();
    assert_eq!(view.place, "Blue Bottle");
    assert_eq!(view.location.address, "1 Main St");
    assert_eq!(view.rating, 5);
}

#[tokio::test]
async fn test_update_with_missing_location_id_is_not_found() {
    let (service, _repo, _pool) = setup().await;
    let coffee = service.create(sample_input()).await.unwrap();

    let update = CoffeeUpdate {
        name: "Espresso".to_string(),
        place: "Blue Bottle".to_string(),
        rating: 2,
        coffee_type: "espresso".to_string(),
        notes: String::new(),
        location: LocationUpdate {
            id: 424242,
            address: "1 Main St".to_string(),
            city: "Oakland".to_string(),
            latitude: 37.8,
            longitude: -122.27,
        },
    };

    let err = service.update(coffee.id, update).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // The coffee keeps its pre-update rating
    let view = service.get(coffee.id).await.unwrap();
    assert_eq!(view.rating, 5);
}

#[tokio::test]
async fn test_create_failure_then_retry_succeeds() {
    let (service, repo, pool) = setup().await;
    let input = sample_input();

    // Failed attempt at the port level, rolled back
    let mut tx = repo.begin_transaction().await.unwrap();
    tx.insert_location(&input.place, &input.location).await.unwrap();
    tx.insert_coffee(&input, 424242).await.unwrap_err();
    tx.rollback().await.unwrap();

    // The caller retries the whole operation; the pool connection was
    // released, so a fresh transaction goes through cleanly
    let coffee = service.create(sample_input()).await.unwrap();
    assert_eq!(count(&pool, "coffee").await, 1);
    assert_eq!(count(&pool, "place_location").await, 1);
    assert_eq!(service.get(coffee.id).await.unwrap().place, "Blue Bottle");
}
