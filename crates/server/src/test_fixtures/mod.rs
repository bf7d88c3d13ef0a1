// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures: an in-memory [`ExplorerApi`] and cell builders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::consts::KnownScript;
use crate::explorer::{CollectionMatch, ExplorerApi, ExplorerError, ExplorerFuture};
use crate::types::{Byte32, Cell, HexBytes, Script, TransactionCells, TypeScript, Uint64};
use crate::udt_registry::UdtInfo;

/// In-memory explorer. Every lookup is counted so tests can assert on
/// request coalescing and caching.
#[derive(Default)]
pub struct MockExplorer {
    udts: Vec<UdtInfo>,
    registry_fails: bool,
    clusters: HashMap<Byte32, CollectionMatch>,
    cell_data: HashMap<u64, HexBytes>,
    transactions: HashMap<Byte32, TransactionCells>,
    delay: Duration,
    registry_calls: AtomicUsize,
    cluster_calls: AtomicUsize,
    cell_data_calls: AtomicUsize,
}

impl MockExplorer {
    pub fn with_udts(mut self, udts: Vec<UdtInfo>) -> Self {
        self.udts = udts;
        self
    }

    pub fn failing_registry(mut self) -> Self {
        self.registry_fails = true;
        self
    }

    pub fn with_cluster(mut self, cluster_id: Byte32, name: &str, type_hash: Byte32) -> Self {
        self.clusters.insert(
            cluster_id,
            CollectionMatch {
                collection_name: name.to_string(),
                type_script_hash: type_hash,
            },
        );
        self
    }

    pub fn with_cell_data(mut self, id: u64, data: Vec<u8>) -> Self {
        self.cell_data.insert(id, data.into());
        self
    }

    pub fn with_transaction(mut self, tx: TransactionCells) -> Self {
        self.transactions.insert(tx.transaction_hash, tx);
        self
    }

    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    pub fn registry_calls(&self) -> usize {
        self.registry_calls.load(Ordering::SeqCst)
    }

    pub fn cluster_calls(&self) -> usize {
        self.cluster_calls.load(Ordering::SeqCst)
    }

    pub fn cell_data_calls(&self) -> usize {
        self.cell_data_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl ExplorerApi for MockExplorer {
    fn udt_registry(&self) -> ExplorerFuture<'_, Vec<UdtInfo>> {
        Box::pin(async move {
            self.registry_calls.fetch_add(1, Ordering::SeqCst);
            self.pause().await;
            if self.registry_fails {
                return Err(ExplorerError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.udts.clone())
        })
    }

    fn search_cluster(&self, cluster_id: Byte32) -> ExplorerFuture<'_, CollectionMatch> {
        Box::pin(async move {
            self.cluster_calls.fetch_add(1, Ordering::SeqCst);
            self.pause().await;
            self.clusters
                .get(&cluster_id)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(format!("cluster {}", cluster_id)))
        })
    }

    fn cell_output_data(&self, id: u64) -> ExplorerFuture<'_, HexBytes> {
        Box::pin(async move {
            self.cell_data_calls.fetch_add(1, Ordering::SeqCst);
            self.pause().await;
            self.cell_data
                .get(&id)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(format!("cell {}", id)))
        })
    }

    fn transaction_cells(&self, tx_hash: Byte32) -> ExplorerFuture<'_, TransactionCells> {
        Box::pin(async move {
            self.pause().await;
            self.transactions
                .get(&tx_hash)
                .cloned()
                .ok_or_else(|| ExplorerError::NotFound(format!("transaction {}", tx_hash)))
        })
    }
}

/// Registry entry whose type hash is 32 copies of `byte`.
pub fn udt_info(byte: u8, symbol: &str, decimal_places: u32) -> UdtInfo {
    UdtInfo {
        type_hash: Byte32::from([byte; 32]),
        symbol: symbol.to_string(),
        name: format!("{} token", symbol),
        icon: format!("https://icons.example/{}.svg", symbol.to_lowercase()),
        decimal_places,
    }
}

pub fn known_script(known: &KnownScript, args: &[u8]) -> Script {
    Script::new(
        Byte32::from_hex(known.code_hash).expect("table hashes are valid"),
        known.hash_type,
        args,
    )
}

pub fn cell(capacity: u64, data: &[u8], type_script: Option<Script>) -> Cell {
    Cell {
        id: None,
        capacity: Uint64(capacity),
        data: Some(HexBytes::from(data)),
        type_script: type_script.map(TypeScript::from),
        address_hash: None,
    }
}
