// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::metrics,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};

/// Unversioned, so scrapers keep a stable path.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, "", "/metrics", "get", get(metrics::get_metrics))
        .route_registered(
            registry,
            "",
            "/metrics.json",
            "get",
            get(metrics::get_metrics_json),
        )
}
