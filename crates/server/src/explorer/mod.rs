// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Upstream explorer REST API.
//!
//! Everything the service needs from the explorer goes through the
//! [`ExplorerApi`] trait, so renderers and handlers can be exercised against
//! an in-memory implementation.

pub mod client;

pub use client::HttpExplorerClient;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Byte32, HexBytes, TransactionCells};
use crate::udt_registry::UdtInfo;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Explorer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode explorer response: {0}")]
    Decode(String),
}

impl ExplorerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::NotFound(_))
    }
}

pub type ExplorerFuture<'a, T> = BoxFuture<'a, Result<T, ExplorerError>>;

/// NFT collection found by a cluster id search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMatch {
    #[serde(alias = "collection_name", alias = "name")]
    pub collection_name: String,
    #[serde(alias = "type_script_hash")]
    pub type_script_hash: Byte32,
}

pub trait ExplorerApi: Send + Sync {
    /// Every registered UDT.
    fn udt_registry(&self) -> ExplorerFuture<'_, Vec<UdtInfo>>;

    /// First NFT collection matching `cluster_id`.
    /// [`ExplorerError::NotFound`] when there is none.
    fn search_cluster(&self, cluster_id: Byte32) -> ExplorerFuture<'_, CollectionMatch>;

    /// Full data of the cell with explorer id `id`.
    fn cell_output_data(&self, id: u64) -> ExplorerFuture<'_, HexBytes>;

    /// Display inputs and outputs of a transaction.
    fn transaction_cells(&self, tx_hash: Byte32) -> ExplorerFuture<'_, TransactionCells>;
}
