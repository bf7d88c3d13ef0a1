// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{DataParseUnit, DecodeTag};
use crate::types::Byte32;
use crate::utils::molecule::{MoleculeError, TableReader, unpack_bytes, unpack_bytes_opt};

/// Spore NFT cells, molecule `SporeData`:
///
/// ```text
/// table SporeData {
///     content_type: Bytes,
///     content: Bytes,
///     cluster_id: BytesOpt,
/// }
/// ```
pub struct SporeDpu;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SporeContent {
    pub content_type: String,
    pub content_size: usize,
    /// Parent cluster; `None` for an unclustered item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<Byte32>,
    /// Raw content, kept for the cover detail and never serialized.
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl SporeContent {
    pub fn is_image(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .is_some_and(|mime| mime.trim().starts_with("image/"))
    }
}

fn decode(data: &[u8]) -> Result<SporeContent, MoleculeError> {
    let table = TableReader::parse(data)?;
    let field = |index| {
        table
            .field(index)
            .ok_or(MoleculeError::InvalidOffset(index))
    };

    let content_type = unpack_bytes(field(0)?)?;
    let content = unpack_bytes(field(1)?)?;
    // a cluster id of the wrong width is treated as absent
    let cluster_id = match table.field(2) {
        Some(raw) => unpack_bytes_opt(raw)?.and_then(Byte32::from_slice),
        None => None,
    };

    Ok(SporeContent {
        content_type: String::from_utf8_lossy(content_type).into_owned(),
        content_size: content.len(),
        cluster_id,
        content: content.to_vec(),
    })
}

impl DataParseUnit for SporeDpu {
    const TAG: DecodeTag = DecodeTag::Spore;
    type Content = SporeContent;

    fn parse(data: &[u8]) -> SporeContent {
        if data.is_empty() {
            return SporeContent::default();
        }
        decode(data).unwrap_or_else(|err| {
            tracing::debug!("Malformed spore data ({} bytes): {}", data.len(), err);
            SporeContent::default()
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::molecule::{pack_bytes, pack_bytes_opt, pack_table};

    pub(crate) fn encode_spore(
        content_type: &str,
        content: &[u8],
        cluster_id: Option<&[u8]>,
    ) -> Vec<u8> {
        let content_type = pack_bytes(content_type.as_bytes());
        let content = pack_bytes(content);
        let cluster_id = pack_bytes_opt(cluster_id);
        pack_table(&[
            content_type.as_slice(),
            content.as_slice(),
            cluster_id.as_slice(),
        ])
    }

    #[test]
    fn test_spore_with_cluster() {
        let cover = [0x89, 0x50, 0x4e, 0x47];
        let data = encode_spore("image/png", &cover, Some([7; 32].as_slice()));
        let spore = SporeDpu::parse(&data);
        assert_eq!(spore.content_type, "image/png");
        assert_eq!(spore.content_size, 4);
        assert_eq!(spore.cluster_id, Some(Byte32::from([7; 32])));
        assert!(spore.is_image());
    }

    #[test]
    fn test_spore_without_cluster() {
        let data = encode_spore("text/plain", b"hello", None);
        let spore = SporeDpu::parse(&data);
        assert!(spore.cluster_id.is_none());
        assert_eq!(spore.content, b"hello");
        assert!(!spore.is_image());
    }

    #[test]
    fn test_field_lengths_are_honoured() {
        // the content contains a byte sequence that looks like a cluster id
        let mut content = vec![0x20, 0, 0, 0];
        content.extend_from_slice(&[9; 32]);
        let data = encode_spore("application/octet-stream", &content, None);
        let spore = SporeDpu::parse(&data);
        assert_eq!(spore.content_size, 36);
        assert!(spore.cluster_id.is_none());
    }

    #[test]
    fn test_malformed_spore_is_empty() {
        let data = encode_spore("image/png", b"abc", Some([7; 32].as_slice()));
        let spore = SporeDpu::parse(&data[..data.len() - 3]);
        assert_eq!(spore, SporeContent::default());
        assert_eq!(SporeDpu::parse(&[0xde, 0xad]), SporeContent::default());
    }

    #[test]
    fn test_content_type_parameters() {
        let data = encode_spore("image/svg+xml;charset=utf-8", b"<svg/>", None);
        assert!(SporeDpu::parse(&data).is_image());
    }

    #[test]
    fn test_serialized_shape() {
        let data = encode_spore("text/plain", b"hi", Some([1; 32].as_slice()));
        let json = serde_json::to_value(SporeDpu::parse(&data)).unwrap();
        assert_eq!(json["contentType"], "text/plain");
        assert_eq!(json["contentSize"], 2);
        assert_eq!(json["clusterId"], format!("0x{}", "01".repeat(32)));
        assert!(json.get("content").is_none());
    }
}
