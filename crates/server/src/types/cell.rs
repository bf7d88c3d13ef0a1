// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::{Byte32, HexBytes, TypeScript, Uint64};

/// A cell as returned by the explorer API, on either side of a transaction.
///
/// `data` may be absent or truncated by the API; the full payload can be
/// fetched by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uint64>,
    pub capacity: Uint64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HexBytes>,
    #[serde(default, alias = "type_script", skip_serializing_if = "Option::is_none")]
    pub type_script: Option<TypeScript>,
    #[serde(default, alias = "address_hash", skip_serializing_if = "Option::is_none")]
    pub address_hash: Option<String>,
}

impl Cell {
    /// Cell data, with an absent field read as empty.
    pub fn data_bytes(&self) -> &[u8] {
        self.data.as_ref().map(HexBytes::as_slice).unwrap_or_default()
    }

    pub fn has_data(&self) -> bool {
        !self.data_bytes().is_empty()
    }

    pub fn cell_id(&self) -> Option<u64> {
        self.id.map(|id| id.value())
    }

    /// Explorer id of a cell listed without its data, which has to be
    /// fetched before decoding.
    pub fn elided_data_id(&self) -> Option<u64> {
        if self.has_data() { None } else { self.cell_id() }
    }
}

/// Inputs and outputs of one transaction, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCells {
    #[serde(alias = "transaction_hash")]
    pub transaction_hash: Byte32,
    #[serde(default, alias = "display_inputs")]
    pub display_inputs: Vec<Cell>,
    #[serde(default, alias = "display_outputs")]
    pub display_outputs: Vec<Cell>,
}
