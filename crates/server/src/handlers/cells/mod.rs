// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;
mod display_cell;
mod display_cells;
mod get_cell_detail;
mod parse_cell;

pub use common::{CellsError, MAX_BATCH_CELLS, RenderQueryParams};
pub use display_cell::display_cell;
pub use display_cells::display_cells;
pub use get_cell_detail::get_cell_detail;
pub use parse_cell::{ParseCellRequest, ParseCellResponse, parse_cell};
