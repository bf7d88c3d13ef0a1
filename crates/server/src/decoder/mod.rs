// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cell data decoding.
//!
//! Decoding happens in two steps. [`parse_type`] classifies a cell by its
//! type script alone and yields a [`DecodeTag`]; [`parse_data`] then hands
//! the raw cell data to the [`DataParseUnit`] selected by that tag. The data
//! never influences which unit is chosen.
//!
//! Every unit is total: malformed or truncated data decodes to a best-effort
//! value instead of an error.

mod cluster;
mod dao;
mod spore;
mod type_id;
mod udt;

pub use cluster::{ClusterContent, SporeClusterDpu};
pub use dao::{DaoContent, DaoDpu};
pub use spore::{SporeContent, SporeDpu};
pub use type_id::{TypeIdContent, TypeIdDpu, is_type_id};
pub use udt::{UdtContent, UdtDpu};

#[cfg(test)]
pub(crate) use cluster::tests::encode_cluster;
#[cfg(test)]
pub(crate) use spore::tests::encode_spore;

use config::Network;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::scripts;
use crate::types::{Cell, Script, TypeScript};

/// Which decoder applies to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeTag {
    /// No type script: a plain CKB cell.
    None,
    Udt,
    Dao,
    Spore,
    SporeCluster,
    TypeId,
    /// A type script that matches no known deployment.
    Unknown,
}

impl DecodeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeTag::None => "none",
            DecodeTag::Udt => "udt",
            DecodeTag::Dao => "dao",
            DecodeTag::Spore => "spore",
            DecodeTag::SporeCluster => "spore-cluster",
            DecodeTag::TypeId => "type-id",
            DecodeTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DecodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoder for one on-chain data shape.
///
/// Units are independent of each other and of dispatch; adding a shape
/// means adding a unit, a [`DecodeTag`] and a [`DecodedContent`] variant.
pub trait DataParseUnit {
    const TAG: DecodeTag;
    type Content;

    fn parse(data: &[u8]) -> Self::Content;
}

/// Decoded cell content, one shape per tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DecodedContent {
    Udt(UdtContent),
    Dao(DaoContent),
    Spore(SporeContent),
    SporeCluster(ClusterContent),
    TypeId(TypeIdContent),
}

impl DecodedContent {
    pub fn tag(&self) -> DecodeTag {
        match self {
            DecodedContent::Udt(_) => UdtDpu::TAG,
            DecodedContent::Dao(_) => DaoDpu::TAG,
            DecodedContent::Spore(_) => SporeDpu::TAG,
            DecodedContent::SporeCluster(_) => SporeClusterDpu::TAG,
            DecodedContent::TypeId(_) => TypeIdDpu::TAG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoded {
    pub content: DecodedContent,
}

/// Classify a cell by its (optional) type script.
///
/// A type script that could not be parsed is [`DecodeTag::Unknown`].
pub fn parse_type(type_script: Option<&TypeScript>, network: Network) -> DecodeTag {
    match type_script {
        None => DecodeTag::None,
        Some(TypeScript::Malformed(_)) => DecodeTag::Unknown,
        Some(TypeScript::Script(script)) => classify_script(script, network),
    }
}

/// Match a script against the well-known deployments of `network`.
///
/// Type ID is checked before the deployment tables.
pub fn classify_script(script: &Script, network: Network) -> DecodeTag {
    if is_type_id(script) {
        return DecodeTag::TypeId;
    }

    let table = scripts(network);
    if table.udt.iter().any(|known| known.matches(script)) {
        DecodeTag::Udt
    } else if table.dao.matches(script) {
        DecodeTag::Dao
    } else if table.spore.iter().any(|known| known.matches(script)) {
        DecodeTag::Spore
    } else if table.spore_cluster.iter().any(|known| known.matches(script)) {
        DecodeTag::SporeCluster
    } else {
        DecodeTag::Unknown
    }
}

/// Decode `data` with the unit selected by `tag`. Plain and unknown cells
/// have no structured content.
pub fn parse_data(tag: DecodeTag, data: &[u8]) -> Option<Decoded> {
    let content = match tag {
        DecodeTag::None | DecodeTag::Unknown => return None,
        DecodeTag::Udt => DecodedContent::Udt(UdtDpu::parse(data)),
        DecodeTag::Dao => DecodedContent::Dao(DaoDpu::parse(data)),
        DecodeTag::Spore => DecodedContent::Spore(SporeDpu::parse(data)),
        DecodeTag::SporeCluster => DecodedContent::SporeCluster(SporeClusterDpu::parse(data)),
        DecodeTag::TypeId => DecodedContent::TypeId(TypeIdDpu::parse(data)),
    };
    Some(Decoded { content })
}

/// Classify and decode a cell in one go.
pub fn decode_cell(cell: &Cell, network: Network) -> (DecodeTag, Option<Decoded>) {
    let tag = parse_type(cell.type_script.as_ref(), network);
    (tag, parse_data(tag, cell.data_bytes()))
}
