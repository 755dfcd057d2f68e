use crate::config::{BootstrapSettings, DatabaseConnections};

/// Run database migrations for the item database
///
/// Connects and runs all pending migrations without building AppData.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(...)` - Connection or migration failed
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let connections = DatabaseConnections::init(settings).await?;
    connections.migrate().await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
