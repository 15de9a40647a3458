use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamehub_api::api;
use gamehub_api::config::Config;
use gamehub_api::db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,gamehub_api=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Initialized configuration");

    // Initialize database pool and apply migrations
    let db = Database::new(&config.database).await?;
    info!("Connected to database");

    // Serve the API until shutdown
    api::start_api_server(&config.server, db.pool().clone()).await?;

    info!("GameHub API shutdown complete");
    Ok(())
}
