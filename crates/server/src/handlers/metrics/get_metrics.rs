// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Value, json};

use crate::metrics::{self, GatherError};

fn gather_error(err: GatherError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Failed to gather metrics: {}", err) })),
    )
        .into_response()
}

/// GET /metrics, Prometheus text format.
pub async fn get_metrics() -> Response {
    match metrics::gather_metrics() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(err) => gather_error(err),
    }
}

fn metric_value(metric: &Metric) -> Value {
    if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_gauge() {
        json!(metric.get_gauge().get_value())
    } else if metric.has_histogram() {
        let histogram = metric.get_histogram();
        json!({
            "sample_count": histogram.get_sample_count(),
            "sample_sum": histogram.get_sample_sum(),
        })
    } else {
        Value::Null
    }
}

fn family_json(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|metric| {
            let labels: Vec<Value> = metric
                .get_label()
                .iter()
                .map(|l| json!({ "name": l.get_name(), "value": l.get_value() }))
                .collect();
            json!({ "labels": labels, "value": metric_value(metric) })
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

/// GET /metrics.json, the same families as JSON.
pub async fn get_metrics_json() -> Response {
    match metrics::gather_metric_families() {
        Ok(families) => Json(families.iter().map(family_json).collect::<Vec<_>>()).into_response(),
        Err(err) => gather_error(err),
    }
}
