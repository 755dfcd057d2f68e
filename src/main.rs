use std::sync::Arc;

use clap::Parser;
use itembook_backend::cli::{execute_command, Cli};
use itembook_backend::config::{init_logging, BootstrapSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(Arc::new(SystemEnvironment))?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!(?settings, "Loaded bootstrap settings");

    execute_command(cli, settings).await
}
