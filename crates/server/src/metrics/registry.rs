// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{
    Counter, Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Metrics output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    // Counter metrics - created without registering to default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    // Histogram metrics - created without registering to default registry
    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref UPSTREAM_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "upstream_request_duration_seconds",
            "Duration of explorer API requests in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["endpoint", "outcome"]
    )
    .expect("Failed to create upstream_request_duration_seconds histogram");

    // Decoding and resolution
    pub static ref CELLS_CLASSIFIED: IntCounterVec = IntCounterVec::new(
        Opts::new("cells_classified", "Cells classified, by decode tag"),
        &["tag"]
    )
    .expect("Failed to create cells_classified counter");

    pub static ref RESOLUTIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("resolutions", "Asynchronous field resolutions, by kind and outcome"),
        &["kind", "outcome"]
    )
    .expect("Failed to create resolutions counter");

    pub static ref REGISTRY_LOOKUPS: IntCounterVec = IntCounterVec::new(
        Opts::new("udt_registry_lookups", "UDT registry lookups, by result"),
        &["result"]
    )
    .expect("Failed to create udt_registry_lookups counter");
}

/// Initialize metrics by registering them with a registry using `prefix`.
/// Later calls are no-ops.
pub fn init(prefix: &str) -> Result<(), prometheus::Error> {
    let mut guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(HTTP_REQUESTS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_SUCCESS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_ERROR.clone()))?;
    registry.register(Box::new(REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(RESPONSE_SIZE_BYTES.clone()))?;
    registry.register(Box::new(UPSTREAM_REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(CELLS_CLASSIFIED.clone()))?;
    registry.register(Box::new(RESOLUTIONS.clone()))?;
    registry.register(Box::new(REGISTRY_LOOKUPS.clone()))?;

    *guard = Some(registry);
    Ok(())
}

/// Gather all metric families from the initialized registry
pub fn gather_metric_families() -> Result<Vec<MetricFamily>, GatherError> {
    let guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    let registry = guard.as_ref().ok_or(GatherError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, GatherError> {
    let encoder = TextEncoder::new();
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Count one cell classified as `tag`.
pub fn record_classification(tag: &str) {
    CELLS_CLASSIFIED.with_label_values(&[tag]).inc();
}

/// Count one resolution of `kind` ("udt", "cluster", "cell_data") ending in
/// `outcome` ("ok", "failed").
pub fn record_resolution(kind: &str, outcome: &str) {
    RESOLUTIONS.with_label_values(&[kind, outcome]).inc();
}
