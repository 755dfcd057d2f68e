// Common test utilities for integration tests

use itembook_backend::api::build_app;
use itembook_backend::services::{Clock, FixedClock};
use itembook_backend::stores::ItemStore;
use migration::{ItemMigrator, MigratorTrait};
use poem::test::TestClient;
use poem::Endpoint;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// 2023-11-14 22:13:20 UTC
pub const TEST_NOW: i64 = 1_700_000_000;

/// Creates a test item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates a test HTTP client over the full application
///
/// Returns (client, item_store, clock)
pub async fn setup_test_app() -> (TestClient<impl Endpoint>, Arc<ItemStore>, Arc<FixedClock>) {
    let db = setup_test_db().await;
    let clock = Arc::new(FixedClock::new(TEST_NOW));
    let store = Arc::new(ItemStore::with_clock(
        db,
        clock.clone() as Arc<dyn Clock + Send + Sync>,
    ));

    let client = TestClient::new(build_app(store.clone(), "http://localhost:3000"));

    (client, store, clock)
}
