// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

macro_rules! log_request {
    ($level:ident, $method:expr, $path:expr, $status:expr, $ms:expr) => {
        tracing::$level!(
            target: "http",
            method = %$method,
            path = %$path,
            status = $status,
            duration_ms = $ms,
            "{} {} {} {}ms",
            $method,
            $path,
            $status,
            $ms
        )
    };
}

/// Request log middleware, e.g. `GET /v1/cells/display 200 45ms`.
///
/// Successful requests log at debug under the `http` target (see the
/// `http` log level), 4xx at warn and 5xx at error.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();
    match status {
        200..=399 => log_request!(debug, method, path, status, duration_ms),
        400..=499 => log_request!(warn, method, path, status, duration_ms),
        _ => log_request!(error, method, path, status, duration_ms),
    }

    response
}
