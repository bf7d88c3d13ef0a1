// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry of the routes the router serves, listed by the root endpoint.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Prefix of every versioned route.
pub const API_VERSION: &str = "/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Full path pattern, e.g. `/v1/transactions/{txHash}/cells`.
    pub path: String,
    pub method: String,
}

/// Shared, append-only list of routes.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Register a route on a router and record it in a [`RouteRegistry`].
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Route `path` on this router and record `prefix` + `path`, the path
    /// the route is reachable at once this router is nested under `prefix`.
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(&format!("{}{}", prefix, path), method);
        self.route(path, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_registered_paths_carry_prefix() {
        let registry = RouteRegistry::new();
        let _router: Router = Router::new()
            .route_registered(&registry, API_VERSION, "/health", "get", get(|| async {}))
            .route_registered(&registry, "", "/metrics", "get", get(|| async {}));

        assert_eq!(
            registry.routes(),
            vec![
                RouteInfo {
                    path: "/v1/health".to_string(),
                    method: "get".to_string()
                },
                RouteInfo {
                    path: "/metrics".to_string(),
                    method: "get".to_string()
                },
            ]
        );
    }
}
