// CLI module - server, migration and terminal client commands

pub mod migrate;
pub mod open;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::client::ItemForm;
use crate::config::BootstrapSettings;

/// Itembook: item CRUD server and terminal client
#[derive(Parser, Debug)]
#[command(name = "itembook")]
#[command(about = "Item CRUD backend with a JSON API and a terminal client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Open a client view: /, /create, /{id}, /{id}/edit or /{id}/delete
    Open {
        /// Client route to open
        #[arg(default_value = "/")]
        route: String,

        /// Title for the create and edit views
        #[arg(long)]
        title: Option<String>,

        /// Comment for the create and edit views
        #[arg(long)]
        comment: Option<String>,

        /// Confirm deletion in the delete view
        #[arg(long)]
        confirm: bool,
    },
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
/// With no subcommand the server is started.
pub async fn execute_command(
    cli: Cli,
    settings: BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Migrate => migrate::run_migrations(&settings).await?,
        Commands::Open {
            route,
            title,
            comment,
            confirm,
        } => {
            let form = ItemForm { title, comment };
            open::open_route(&settings, &route, form, confirm).await?;
        }
    }

    Ok(())
}
