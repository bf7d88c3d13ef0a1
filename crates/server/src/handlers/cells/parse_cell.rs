// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::decoder::{DecodeTag, DecodedContent, parse_data, parse_type};
use crate::extractors::JsonBody;
use crate::metrics::record_classification;
use crate::state::AppState;
use crate::types::{HexBytes, TypeScript};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseCellRequest {
    #[serde(default, alias = "type_script")]
    pub type_script: Option<TypeScript>,
    #[serde(default)]
    pub data: Option<HexBytes>,
}

#[derive(Debug, Serialize)]
pub struct ParseCellResponse {
    pub tag: DecodeTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<DecodedContent>,
}

/// Handler for POST /v1/cells/parse
///
/// Classifies the type script and decodes the data, without any lookup.
pub async fn parse_cell(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ParseCellRequest>,
) -> Json<ParseCellResponse> {
    let tag = parse_type(request.type_script.as_ref(), state.displayer.network());
    record_classification(tag.as_str());
    let data = request.data.unwrap_or_default();
    let content = parse_data(tag, data.as_slice()).map(|decoded| decoded.content);

    Json(ParseCellResponse { tag, content })
}
