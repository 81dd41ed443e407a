//! Courtmetrics HTTP Server Binary
//!
//! This is the main entry point for the courtmetrics REST API server.
//! It loads the engine configuration, sets up the in-memory repository and
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin courtmetrics-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `COURTMETRICS_CONFIG`: Path to the engine config TOML (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use courtmetrics::config::{ConfigError, EngineConfig};
use courtmetrics::http::{create_router, AppState};
use courtmetrics::store::MemoryRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting courtmetrics HTTP server");

    // Load engine configuration, falling back to the built-in catalogs
    let config = match EngineConfig::from_default_location() {
        Ok(config) => {
            info!("Loaded engine configuration from file");
            config
        }
        Err(ConfigError::NotFound) => {
            info!("No courtmetrics.toml found, using built-in defaults");
            EngineConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Create application state with the in-memory repository
    let repository = Arc::new(MemoryRepository::new());
    let state = AppState::new(repository, Arc::new(config));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
