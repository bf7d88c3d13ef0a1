// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::post};

use crate::{
    handlers::cells,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/cells/parse",
            "post",
            post(cells::parse_cell),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/cells/display",
            "post",
            post(cells::display_cell),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/cells/display/batch",
            "post",
            post(cells::display_cells),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/cells/detail",
            "post",
            post(cells::get_cell_detail),
        )
}
