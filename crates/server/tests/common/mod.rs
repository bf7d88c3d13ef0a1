// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use ckb_explorer_cells::app::create_app;
use ckb_explorer_cells::explorer::{CollectionMatch, ExplorerApi, ExplorerError, ExplorerFuture};
use ckb_explorer_cells::state::AppState;
use ckb_explorer_cells::types::{Byte32, HexBytes, TransactionCells};
use ckb_explorer_cells::udt_registry::UdtInfo;
use ckb_explorer_cells::utils::molecule::{pack_bytes, pack_bytes_opt, pack_table};
use config::ExplorerCellsConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

pub const SUDT_CODE_HASH: &str =
    "0x5e7a36a77e68eecc013dfa2fe6a23f3b6c344b04005808694ae6dd45eea4cfd5";
pub const DAO_CODE_HASH: &str =
    "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e";
pub const SPORE_CODE_HASH: &str =
    "0x4a4dce1df3dffff7f8b2cd7dff7303df3b6150c9788cb75dcf6747247132b9f5";

/// Explorer stand-in with canned answers.
#[derive(Default)]
pub struct StubExplorer {
    pub udts: Vec<UdtInfo>,
    pub clusters: HashMap<Byte32, CollectionMatch>,
    pub cell_data: HashMap<u64, HexBytes>,
    pub transactions: HashMap<Byte32, TransactionCells>,
    pub upstream_down: bool,
    pub cluster_calls: AtomicUsize,
}

impl StubExplorer {
    fn unavailable<T>(&self) -> Result<T, ExplorerError> {
        Err(ExplorerError::Status {
            status: 503,
            body: "maintenance".to_string(),
        })
    }
}

impl ExplorerApi for StubExplorer {
    fn udt_registry(&self) -> ExplorerFuture<'_, Vec<UdtInfo>> {
        Box::pin(async move {
            if self.upstream_down {
                return self.unavailable();
            }
            Ok(self.udts.clone())
        })
    }

    fn search_cluster(&self, cluster_id: Byte32) -> ExplorerFuture<'_, CollectionMatch> {
        Box::pin(async move {
            self.cluster_calls.fetch_add(1, Ordering::SeqCst);
            self.clusters
                .get(&cluster_id)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(cluster_id.to_string()))
        })
    }

    fn cell_output_data(&self, id: u64) -> ExplorerFuture<'_, HexBytes> {
        Box::pin(async move {
            self.cell_data
                .get(&id)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(id.to_string()))
        })
    }

    fn transaction_cells(&self, tx_hash: Byte32) -> ExplorerFuture<'_, TransactionCells> {
        Box::pin(async move {
            if self.upstream_down {
                return self.unavailable();
            }
            self.transactions
                .get(&tx_hash)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(tx_hash.to_string()))
        })
    }
}

pub fn app_with(explorer: Arc<StubExplorer>, config: ExplorerCellsConfig) -> Router {
    create_app(AppState::with_explorer(config, explorer))
}

pub fn app(explorer: StubExplorer) -> Router {
    app_with(Arc::new(explorer), ExplorerCellsConfig::default())
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn hash(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 32]))
}

/// Molecule-encoded SporeData.
pub fn spore_data(content_type: &str, content: &[u8], cluster_id: Option<[u8; 32]>) -> String {
    let content_type = pack_bytes(content_type.as_bytes());
    let content = pack_bytes(content);
    let cluster_id = pack_bytes_opt(cluster_id.as_ref().map(|id| id.as_slice()));
    let table = pack_table(&[
        content_type.as_slice(),
        content.as_slice(),
        cluster_id.as_slice(),
    ]);
    format!("0x{}", hex::encode(table))
}
