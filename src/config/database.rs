use sea_orm::{Database, DatabaseConnection};
use migration::{ItemMigrator, MigratorTrait};
use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Database connections owned by the application
pub struct DatabaseConnections {
    pub items: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the item database
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    ///
    /// # Returns
    /// * `Ok(DatabaseConnections)` - Connection established successfully
    /// * `Err(InternalError)` - Connection failed
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let database_url = bootstrap_settings.database_url();

        let items = Database::connect(database_url)
            .await
            .map_err(|e| InternalError::database("connect_database", e))?;

        tracing::debug!("Connected to item database: {}", database_url);

        Ok(Self { items })
    }

    /// Apply all pending migrations
    pub async fn migrate(&self) -> Result<(), InternalError> {
        migrate_item_database(&self.items).await
    }
}

/// Run migrations on the item database
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_item_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    ItemMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Item database migrations completed");

    Ok(())
}
