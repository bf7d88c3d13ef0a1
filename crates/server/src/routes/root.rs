// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
///
/// Returns service metadata and every registered route.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;

    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "network": config.explorer.network.as_str(),
        "explorer": config.explorer.api_url,
        "listen": format!("{}:{}", config.express.bind_host, config.express.port),
        "routes": state.route_registry.routes(),
    }))
}
