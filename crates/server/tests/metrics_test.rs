// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::http::StatusCode;
use ckb_explorer_cells::consts::scripts;
use ckb_explorer_cells::decoder::{DecodeTag, parse_type};
use ckb_explorer_cells::metrics;
use ckb_explorer_cells::metrics::registry::{
    CELLS_CLASSIFIED, HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS,
    REQUEST_DURATION_SECONDS,
};
use common::{StubExplorer, app_with, send};
use ckb_explorer_cells::types::{Byte32, Script, TypeScript};
use config::{ExplorerCellsConfig, Network};
use serde_json::json;
use std::sync::Arc;

fn metrics_app() -> axum::Router {
    let mut config = ExplorerCellsConfig::default();
    config.metrics.enabled = true;
    app_with(Arc::new(StubExplorer::default()), config)
}

#[test]
fn test_metrics_initialization() {
    metrics::init("test").unwrap();

    let metrics_text = metrics::gather_metrics().unwrap();
    // counters show up even at zero
    assert!(metrics_text.contains("test_http_requests"));
    assert!(metrics_text.contains("test_http_request_success"));
    assert!(metrics_text.contains("test_http_request_error"));
}

#[test]
fn test_http_metrics_increment() {
    metrics::init("test").unwrap();

    let initial_total = HTTP_REQUESTS.get();
    let initial_success = HTTP_REQUEST_SUCCESS.get();
    let initial_error = HTTP_REQUEST_ERROR.get();

    HTTP_REQUESTS.inc();
    HTTP_REQUEST_SUCCESS.inc();
    HTTP_REQUEST_ERROR.inc();

    assert!(HTTP_REQUESTS.get() >= initial_total + 1.0);
    assert!(HTTP_REQUEST_SUCCESS.get() >= initial_success + 1.0);
    assert!(HTTP_REQUEST_ERROR.get() >= initial_error + 1.0);
}

#[test]
fn test_histogram_metrics() {
    metrics::init("test").unwrap();

    REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", "/v1/health", "200"])
        .observe(0.5);

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("test_request_duration_seconds"));
    assert!(metrics_text.contains("bucket"));
}

#[tokio::test]
async fn test_requests_are_labelled_by_route_pattern() {
    metrics::init("test").unwrap();

    let uri = format!("/v1/udts/{}", common::hash(0x42));
    let (status, _) = send(metrics_app(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = {
        use http_body_util::BodyExt;
        use tower::ServiceExt;
        let response = metrics_app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/metrics")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    };
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("route=\"/v1/udts/{typeHash}\""), "{text}");
    assert!(!text.contains(&common::hash(0x42)));
}

#[tokio::test]
async fn test_decode_tags_are_counted() {
    metrics::init("test").unwrap();
    let before = CELLS_CLASSIFIED.with_label_values(&["none"]).get();

    send(
        metrics_app(),
        "POST",
        "/v1/cells/parse",
        Some(json!({ "data": "0x" })),
    )
    .await;

    assert!(CELLS_CLASSIFIED.with_label_values(&["none"]).get() > before);

    let (status, body) = send(metrics_app(), "GET", "/metrics.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .any(|family| family["name"] == "test_cells_classified")
    );
}

#[tokio::test]
async fn test_classification_is_counted_once_per_request() {
    metrics::init("test").unwrap();
    let cluster = &scripts(Network::Mainnet).spore_cluster[0];
    let code_hash = Byte32::from_hex(cluster.code_hash).unwrap();
    let script = Script::new(code_hash, cluster.hash_type, vec![0x44; 32]);
    let counter = CELLS_CLASSIFIED.with_label_values(&["spore-cluster"]);
    let before = counter.get();

    // classifying by itself records nothing
    for _ in 0..3 {
        let type_script = TypeScript::from(script.clone());
        assert_eq!(
            parse_type(Some(&type_script), Network::Mainnet),
            DecodeTag::SporeCluster
        );
    }
    assert_eq!(counter.get(), before);

    let (status, body) = send(
        metrics_app(),
        "POST",
        "/v1/cells/parse",
        Some(json!({ "typeScript": script, "data": "0x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"], "spore-cluster");
    assert_eq!(counter.get(), before + 1);
}
