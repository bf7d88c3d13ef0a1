// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::{
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Build the router: versioned routes under `/v1`, the root listing, and
/// the metrics endpoints when enabled.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let v1 = Router::new()
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::cells::routes(registry))
        .merge(routes::transactions::routes(registry))
        .merge(routes::udts::routes(registry));

    let mut app = Router::new()
        .route("/", get(routes::root::root_handler))
        .nest(API_VERSION, v1);

    let metrics_enabled = state.config.metrics.enabled;
    if metrics_enabled {
        app = app.merge(routes::metrics::routes(registry));
    }

    app = app.layer(middleware::from_fn(http_logger_middleware));
    if metrics_enabled {
        app = app.layer(middleware::from_fn(metrics_middleware));
    }

    let request_limit = state.config.express.request_limit;
    app.layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(request_limit))
        .with_state(state)
}
