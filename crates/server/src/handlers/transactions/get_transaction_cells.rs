// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::display::RenderedCell;
use crate::explorer::ExplorerError;
use crate::extractors::JsonQuery;
use crate::handlers::cells::RenderQueryParams;
use crate::state::AppState;
use crate::types::{Byte32, HexError};

#[derive(Debug, Error)]
pub enum GetTransactionCellsError {
    #[error("Invalid transaction hash: {0}")]
    InvalidHash(#[source] HexError),

    #[error("Transaction not found: {0}")]
    NotFound(Byte32),

    #[error("Failed to fetch transaction")]
    Upstream(#[source] ExplorerError),
}

impl IntoResponse for GetTransactionCellsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GetTransactionCellsError::InvalidHash(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            GetTransactionCellsError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            GetTransactionCellsError::Upstream(err) => {
                (StatusCode::BAD_GATEWAY, format!("{}: {}", self, err))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCellsResponse {
    pub transaction_hash: Byte32,
    pub inputs: Vec<RenderedCell>,
    pub outputs: Vec<RenderedCell>,
}

/// Handler for GET /v1/transactions/{txHash}/cells
///
/// Fetches the transaction's cells from the explorer and renders inputs and
/// outputs. Only the transaction itself can fail the request; per-cell
/// lookups degrade to fallbacks.
pub async fn get_transaction_cells(
    State(state): State<AppState>,
    Path(tx_hash): Path<String>,
    JsonQuery(params): JsonQuery<RenderQueryParams>,
) -> Result<Json<TransactionCellsResponse>, GetTransactionCellsError> {
    let tx_hash = Byte32::from_hex(&tx_hash).map_err(GetTransactionCellsError::InvalidHash)?;

    let cells = state
        .explorer
        .transaction_cells(tx_hash)
        .await
        .map_err(|err| match err {
            ExplorerError::NotFound(_) => GetTransactionCellsError::NotFound(tx_hash),
            other => GetTransactionCellsError::Upstream(other),
        })?;

    let (inputs, outputs) = tokio::join!(
        params.render(&state.displayer, &cells.display_inputs),
        params.render(&state.displayer, &cells.display_outputs),
    );

    Ok(Json(TransactionCellsResponse {
        transaction_hash: cells.transaction_hash,
        inputs,
        outputs,
    }))
}
