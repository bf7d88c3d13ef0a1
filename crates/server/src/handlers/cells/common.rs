// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::display::{CellDisplayer, RenderedCell};
use crate::types::Cell;

/// Largest cell list accepted by one batch request.
pub const MAX_BATCH_CELLS: usize = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderQueryParams {
    /// Skip registry and cluster lookups; lookup fields come back as
    /// `loading`.
    #[serde(default)]
    pub pending: bool,
}

impl RenderQueryParams {
    pub(crate) async fn render(&self, displayer: &CellDisplayer, cells: &[Cell]) -> Vec<RenderedCell> {
        if self.pending {
            cells.iter().map(|cell| displayer.render_pending(cell)).collect()
        } else {
            displayer.render_all(cells).await
        }
    }
}

#[derive(Debug, Error)]
pub enum CellsError {
    #[error("Too many cells: {count} (at most {max} per request)")]
    TooManyCells { count: usize, max: usize },
}

impl IntoResponse for CellsError {
    fn into_response(self) -> Response {
        let status = match self {
            CellsError::TooManyCells { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
