// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};

use super::{CellsError, MAX_BATCH_CELLS, RenderQueryParams};
use crate::display::RenderedCell;
use crate::extractors::{JsonBody, JsonQuery};
use crate::state::AppState;
use crate::types::Cell;

/// Handler for POST /v1/cells/display/batch
///
/// Renders every cell of the list, in order.
pub async fn display_cells(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<RenderQueryParams>,
    JsonBody(cells): JsonBody<Vec<Cell>>,
) -> Result<Json<Vec<RenderedCell>>, CellsError> {
    if cells.len() > MAX_BATCH_CELLS {
        return Err(CellsError::TooManyCells {
            count: cells.len(),
            max: MAX_BATCH_CELLS,
        });
    }
    Ok(Json(params.render(&state.displayer, &cells).await))
}
