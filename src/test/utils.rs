// Test utilities shared across unit tests
// Only compiled when running tests

use crate::services::{Clock, FixedClock};
use crate::stores::ItemStore;
use migration::{ItemMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Fixed starting time for test clocks (2023-11-14 22:13:20 UTC)
pub const TEST_NOW: i64 = 1_700_000_000;

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates an item store over a fresh test database with a fixed clock
///
/// Returns (db, item_store, clock). Callers can discard what they don't need:
/// ```rust
/// let (_db, store, _clock) = setup_test_store().await;
/// ```
pub async fn setup_test_store() -> (DatabaseConnection, Arc<ItemStore>, Arc<FixedClock>) {
    let db = setup_test_db().await;
    let clock = Arc::new(FixedClock::new(TEST_NOW));
    let store = Arc::new(ItemStore::with_clock(
        db.clone(),
        clock.clone() as Arc<dyn Clock + Send + Sync>,
    ));

    (db, store, clock)
}
