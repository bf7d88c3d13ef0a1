// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};

use super::RenderQueryParams;
use crate::display::RenderedCell;
use crate::extractors::{JsonBody, JsonQuery};
use crate::state::AppState;
use crate::types::Cell;

/// Handler for POST /v1/cells/display
pub async fn display_cell(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<RenderQueryParams>,
    JsonBody(cell): JsonBody<Cell>,
) -> Json<RenderedCell> {
    let rendered = if params.pending {
        state.displayer.render_pending(&cell)
    } else {
        state.displayer.render(&cell).await
    };
    Json(rendered)
}
