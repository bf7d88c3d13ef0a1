// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use config::ExplorerCellsConfig;

use crate::display::CellDisplayer;
use crate::explorer::{ExplorerApi, ExplorerError, HttpExplorerClient};
use crate::routes::RouteRegistry;
use crate::udt_registry::UdtRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExplorerCellsConfig>,
    pub explorer: Arc<dyn ExplorerApi>,
    pub registry: Arc<UdtRegistry>,
    pub displayer: Arc<CellDisplayer>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// State backed by the explorer HTTP API named in `config`.
    pub fn new(config: ExplorerCellsConfig) -> Result<Self, ExplorerError> {
        let explorer = Arc::new(HttpExplorerClient::new(&config.explorer)?);
        Ok(Self::with_explorer(config, explorer))
    }

    pub fn with_explorer(config: ExplorerCellsConfig, explorer: Arc<dyn ExplorerApi>) -> Self {
        let registry = Arc::new(UdtRegistry::from_config(explorer.clone(), &config.registry));
        let displayer = Arc::new(CellDisplayer::new(
            config.explorer.network,
            explorer.clone(),
            registry.clone(),
            config.explorer.render_concurrency,
        ));

        Self {
            config: Arc::new(config),
            explorer,
            registry,
            displayer,
            route_registry: RouteRegistry::new(),
        }
    }

    /// Seed the UDT registry from its snapshot, then start the background
    /// registry load when preloading is enabled.
    pub async fn warm_up(&self) {
        self.registry.load_snapshot().await;
        if self.config.registry.preload {
            let registry = self.registry.clone();
            tokio::spawn(async move { registry.preload().await });
        }
    }
}
