// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_transaction_cells;

pub use get_transaction_cells::{
    GetTransactionCellsError, TransactionCellsResponse, get_transaction_cells,
};
