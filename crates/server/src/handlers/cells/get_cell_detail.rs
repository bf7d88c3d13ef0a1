// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};

use crate::display::CellExpansion;
use crate::extractors::JsonBody;
use crate::state::AppState;
use crate::types::Cell;

/// Handler for POST /v1/cells/detail
///
/// Expands the cell and fetches its detail. Cells without a detail come
/// back expanded with none.
pub async fn get_cell_detail(
    State(state): State<AppState>,
    JsonBody(cell): JsonBody<Cell>,
) -> Json<CellExpansion> {
    let mut expansion = state.displayer.expansion(cell);
    expansion.toggle();
    expansion.fetch_detail_on_expand(&state.displayer).await;
    Json(expansion)
}
