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

use crate::resolve::Resolution;
use crate::state::AppState;
use crate::types::{Byte32, HexError};
use crate::udt_registry::UdtInfo;

#[derive(Debug, Error)]
pub enum GetUdtError {
    #[error("Invalid type hash: {0}")]
    InvalidHash(#[source] HexError),
}

impl IntoResponse for GetUdtError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtResponse {
    #[serde(flatten)]
    pub info: UdtInfo,
    /// False when `info` is the fallback for an unregistered token.
    pub registered: bool,
}

/// Handler for GET /v1/udts/{typeHash}
pub async fn get_udt(
    State(state): State<AppState>,
    Path(type_hash): Path<String>,
) -> Result<Json<UdtResponse>, GetUdtError> {
    let type_hash = Byte32::from_hex(&type_hash).map_err(GetUdtError::InvalidHash)?;

    let response = match state.registry.resolve(&type_hash).await {
        Resolution::Ok(info) => UdtResponse {
            info,
            registered: true,
        },
        _ => UdtResponse {
            info: UdtInfo::fallback(&type_hash),
            registered: false,
        },
    };
    Ok(Json(response))
}
