// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use ckb_explorer_cells::{app, logging, metrics, state::AppState};
use config::{Args, ExplorerCellsConfig};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = ExplorerCellsConfig::from_env_file(&args.env_file)?;
    logging::init(&config.log)?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix)?;
    }

    let state = AppState::new(config)?;
    state.warm_up().await;

    let addr = format!(
        "{}:{}",
        state.config.express.bind_host, state.config.express.port
    );
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", state.config.log.level);
    tracing::info!(
        "Explorer: {} ({})",
        state.config.explorer.api_url,
        state.config.explorer.network.as_str()
    );

    let app = app::create_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
