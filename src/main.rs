// gemini-gateway - HTTP relay from a JSON prompt endpoint to the Gemini API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use gemini_gateway::cli::{Args, Command};
use gemini_gateway::config::{AppConfig, LISTEN_PORT};
use gemini_gateway::console;
use gemini_gateway::gemini;
use gemini_gateway::metrics::RequestMetrics;
use gemini_gateway::server::create_router;
use gemini_gateway::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // The terminal client talks to a running gateway and needs none of the server setup
    if let Some(Command::Client { url }) = &args.command {
        console::run_stdio(url).await?;
        return Ok(());
    }

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemini-gateway v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the generation client (loads the API key in live mode)
    info!(
        client = config.gemini.client.as_str(),
        platform = ?config.credentials.platform,
        "Initializing generation client"
    );
    let client = gemini::from_config(&config.gemini, &config.credentials)?;

    // Phase 4: Build and start HTTP server
    let metrics = RequestMetrics::new()?;
    let app = create_router(config.clone(), client, metrics)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, LISTEN_PORT).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server started on {}", addr);

    // Phase 5: Run server with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
