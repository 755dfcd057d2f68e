use poem::{listener::TcpListener, Server};

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseConnections};

/// Connect, migrate and serve the HTTP API until the process is stopped
pub async fn run_server(settings: BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let connections = DatabaseConnections::init(&settings).await?;
    connections.migrate().await?;

    let app_data = AppData::init(settings, connections);
    let address = app_data.settings.server_address();
    let server_url = format!("http://{}", address);

    let app = build_app(app_data.item_store.clone(), &server_url);

    tracing::info!("Starting server on {}", server_url);
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
