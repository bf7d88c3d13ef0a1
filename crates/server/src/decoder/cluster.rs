// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{DataParseUnit, DecodeTag};
use crate::types::Byte32;
use crate::utils::molecule::{MoleculeError, TableReader, unpack_bytes, unpack_bytes_opt};

/// Spore Cluster cells, molecule `ClusterData` in either layout:
///
/// ```text
/// table ClusterDataV1 { name: Bytes, description: Bytes }
/// table ClusterDataV2 { name: Bytes, description: Bytes, mutant_id: BytesOpt }
/// ```
pub struct SporeClusterDpu;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterContent {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutant_id: Option<Byte32>,
}

fn decode(data: &[u8]) -> Result<ClusterContent, MoleculeError> {
    let table = TableReader::parse(data)?;
    let name = unpack_bytes(table.field(0).ok_or(MoleculeError::InvalidOffset(0))?)?;
    let description: &[u8] = match table.field(1) {
        Some(raw) => unpack_bytes(raw)?,
        None => &[],
    };
    let mutant_id = match table.field(2) {
        Some(raw) => unpack_bytes_opt(raw)?.and_then(Byte32::from_slice),
        None => None,
    };

    Ok(ClusterContent {
        name: String::from_utf8_lossy(name).into_owned(),
        description: String::from_utf8_lossy(description).into_owned(),
        mutant_id,
    })
}

impl DataParseUnit for SporeClusterDpu {
    const TAG: DecodeTag = DecodeTag::SporeCluster;
    type Content = ClusterContent;

    fn parse(data: &[u8]) -> ClusterContent {
        if data.is_empty() {
            return ClusterContent::default();
        }
        decode(data).unwrap_or_else(|err| {
            tracing::debug!("Malformed cluster data ({} bytes): {}", data.len(), err);
            ClusterContent::default()
        })
    }
}
