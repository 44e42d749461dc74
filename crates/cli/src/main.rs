//! Mockbuster CLI
//!
//! Admin tool and web server runner.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mockbuster_api::{create_router, AppState};
use mockbuster_database::{Database, StoreConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mockbuster")]
#[command(about = "Mockbuster - Film Rental Catalog Gateway")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },

    /// Check that the catalog store is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // Connect to the catalog store
    let config = StoreConfig::from_env();
    let db = Database::connect(&config).await?;

    match cli.command {
        Commands::Serve { bind } => {
            serve(db, bind).await?;
        }
        Commands::Check => {
            db.ping().await?;
            println!("Store reachable at {}:{}/{}", config.host, config.port, config.dbname);
        }
    }

    Ok(())
}

async fn serve(db: Database, bind: SocketAddr) -> Result<()> {
    let state = Arc::new(AppState::new(db));
    let router = create_router(state);

    info!("Starting Mockbuster server on {}", bind);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
