//! IPN Relay - Main Entry Point
//!
//! Payment webhook to Airtable forwarding service.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use ipn_relay::relay::transport::HttpTableTransport;
use ipn_relay::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ipn_relay=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting IPN Relay");

    // Build the outbound table API transport
    let transport =
        HttpTableTransport::new(&config).context("Failed to build table API client")?;
    info!(table_url = %config.airtable_table_url, "Table API transport initialized");

    // Build application state and router
    let state = api::AppState::new(Arc::new(transport));
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
