// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use skyline_test_app::prelude::*;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;
    let addr = config.socket_addr()?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    spawn_signal_listener(shutdown_tx);

    let listener = bind(addr).await?;

    tracing::info!("Skyline test app starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /       - Greeting");
    tracing::info!("  - GET /health - Health check");

    serve(listener, create_router(), wait_for_shutdown(shutdown_rx)).await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; plain "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
