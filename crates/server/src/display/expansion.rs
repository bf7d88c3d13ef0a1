// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Expand/collapse state of a displayed cell and the detail fetched when
//! it is expanded.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use super::CellDisplayer;
use crate::decoder::{DataParseUnit, DecodeTag, SporeDpu};
use crate::resolve::Resolution;
use crate::types::{Byte32, Cell};
use crate::utils::ckb_blake2b_256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SporeCover {
    pub content_type: String,
    pub content_size: usize,
    /// `data:` URL of the content, for image content only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeIdData {
    pub data_hash: Byte32,
    pub data_size: usize,
}

/// Detail shown under an expanded cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CellDetail {
    SporeCover(SporeCover),
    TypeIdData(TypeIdData),
}

impl CellDetail {
    fn spore_cover(data: &[u8]) -> Self {
        let spore = SporeDpu::parse(data);
        let data_url = spore
            .is_image()
            .then(|| format!("data:{};base64,{}", spore.content_type, STANDARD.encode(&spore.content)));
        CellDetail::SporeCover(SporeCover {
            content_type: spore.content_type,
            content_size: spore.content_size,
            data_url,
        })
    }

    fn type_id_data(data: &[u8]) -> Self {
        CellDetail::TypeIdData(TypeIdData {
            data_hash: Byte32::from(ckb_blake2b_256(data)),
            data_size: data.len(),
        })
    }
}

/// Expand/collapse state of one cell.
///
/// Spore and Type ID cells have a detail that is fetched the first time
/// the cell is expanded. A fetched detail is kept across collapse and
/// reused on the next expand; a failed one is fetched again.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellExpansion {
    #[serde(skip)]
    cell: Cell,
    tag: DecodeTag,
    state: ExpandState,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<Resolution<CellDetail>>,
}

impl CellExpansion {
    pub fn new(cell: Cell, tag: DecodeTag) -> Self {
        Self {
            cell,
            tag,
            state: ExpandState::Collapsed,
            detail: None,
        }
    }

    pub fn state(&self) -> ExpandState {
        self.state
    }

    pub fn tag(&self) -> DecodeTag {
        self.tag
    }

    pub fn detail(&self) -> Option<&Resolution<CellDetail>> {
        self.detail.as_ref()
    }

    /// Whether the cell has a detail to show.
    pub fn is_expandable(&self) -> bool {
        matches!(self.tag, DecodeTag::Spore | DecodeTag::TypeId)
    }

    pub fn toggle(&mut self) -> ExpandState {
        self.state = match self.state {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        };
        self.state
    }

    /// Fetch the detail if the cell is expanded and has none yet.
    ///
    /// Collapsed and non-expandable cells fetch nothing.
    pub async fn fetch_detail_on_expand(
        &mut self,
        displayer: &CellDisplayer,
    ) -> Option<&Resolution<CellDetail>> {
        if self.state != ExpandState::Expanded || !self.is_expandable() {
            return None;
        }
        if !matches!(self.detail, Some(Resolution::Ok(_))) {
            self.detail = Some(self.fetch_detail(displayer).await);
        }
        self.detail.as_ref()
    }

    async fn fetch_detail(&self, displayer: &CellDisplayer) -> Resolution<CellDetail> {
        match self.tag {
            // inline data is complete unless the explorer elided it
            DecodeTag::Spore => match self.cell.elided_data_id() {
                Some(id) => displayer
                    .fetch_cell_data(id)
                    .await
                    .map(|data| CellDetail::spore_cover(data.as_slice())),
                None => Resolution::Ok(CellDetail::spore_cover(self.cell.data_bytes())),
            },
            // inline data may be truncated; hash what the explorer stores
            DecodeTag::TypeId => match self.cell.cell_id() {
                Some(id) => displayer
                    .fetch_cell_data(id)
                    .await
                    .map(|data| CellDetail::type_id_data(data.as_slice())),
                None => Resolution::Ok(CellDetail::type_id_data(self.cell.data_bytes())),
            },
            _ => Resolution::Failed(format!("{} cells have no detail", self.tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{TYPE_ID_CODE_HASH, scripts};
    use crate::decoder::encode_spore;
    use crate::test_fixtures::{MockExplorer, cell, known_script};
    use crate::types::{HashType, Script, Uint64};
    use crate::udt_registry::UdtRegistry;
    use config::Network;
    use serde_json::json;
    use std::sync::Arc;

    fn new_displayer(explorer: MockExplorer) -> (Arc<MockExplorer>, CellDisplayer) {
        let explorer = Arc::new(explorer);
        let registry = Arc::new(UdtRegistry::new(explorer.clone(), None));
        let displayer = CellDisplayer::new(Network::Mainnet, explorer.clone(), registry, 4);
        (explorer, displayer)
    }

    fn spore_script() -> Script {
        known_script(&scripts(Network::Mainnet).spore[0], &[0x11; 32])
    }

    fn type_id_script() -> Script {
        Script::new(
            Byte32::from_hex(TYPE_ID_CODE_HASH).unwrap(),
            HashType::Type,
            vec![0x22; 32],
        )
    }

    #[test]
    fn test_toggle() {
        let mut expansion = CellExpansion::new(cell(1, &[], None), DecodeTag::None);
        assert_eq!(expansion.state(), ExpandState::Collapsed);
        assert_eq!(expansion.toggle(), ExpandState::Expanded);
        assert_eq!(expansion.toggle(), ExpandState::Collapsed);
        assert!(!expansion.is_expandable());
    }

    #[tokio::test]
    async fn test_collapsed_cell_fetches_nothing() {
        let (explorer, displayer) = new_displayer(MockExplorer::default());
        let mut plain = cell(1, &[], Some(type_id_script()));
        plain.id = Some(Uint64(5));
        let mut expansion = displayer.expansion(plain);

        assert!(expansion.fetch_detail_on_expand(&displayer).await.is_none());
        assert_eq!(explorer.cell_data_calls(), 0);
    }

    #[tokio::test]
    async fn test_spore_image_cover_from_inline_data() {
        let png = [0x89, b'P', b'N', b'G'];
        let data = encode_spore("image/png", &png, None);
        let (explorer, displayer) = new_displayer(MockExplorer::default());
        let mut expansion = displayer.expansion(cell(1, &data, Some(spore_script())));

        expansion.toggle();
        let detail = expansion.fetch_detail_on_expand(&displayer).await.cloned();
        assert_eq!(
            detail,
            Some(Resolution::Ok(CellDetail::SporeCover(SporeCover {
                content_type: "image/png".to_string(),
                content_size: 4,
                data_url: Some("data:image/png;base64,iVBORw==".to_string()),
            })))
        );
        assert_eq!(explorer.cell_data_calls(), 0);
    }

    #[tokio::test]
    async fn test_spore_cover_fetched_when_data_elided() {
        let data = encode_spore("text/plain", b"hello", None);
        let (explorer, displayer) = new_displayer(MockExplorer::default().with_cell_data(9, data));
        let mut spore = cell(1, &[], Some(spore_script()));
        spore.id = Some(Uint64(9));
        let mut expansion = displayer.expansion(spore);

        expansion.toggle();
        let detail = expansion.fetch_detail_on_expand(&displayer).await.cloned();
        let Some(Resolution::Ok(CellDetail::SporeCover(cover))) = detail else {
            panic!("expected a spore cover, got {:?}", detail);
        };
        assert_eq!(cover.content_type, "text/plain");
        assert_eq!(cover.content_size, 5);
        assert!(cover.data_url.is_none());
        assert_eq!(explorer.cell_data_calls(), 1);
    }

    #[tokio::test]
    async fn test_type_id_detail_kept_across_collapse() {
        let binary = vec![0xab; 100];
        let (explorer, displayer) =
            new_displayer(MockExplorer::default().with_cell_data(3, binary.clone()));
        let mut type_id = cell(1, &binary[..10], Some(type_id_script()));
        type_id.id = Some(Uint64(3));
        let mut expansion = displayer.expansion(type_id);

        expansion.toggle();
        let first = expansion.fetch_detail_on_expand(&displayer).await.cloned();
        expansion.toggle();
        expansion.toggle();
        let second = expansion.fetch_detail_on_expand(&displayer).await.cloned();

        let expected = CellDetail::TypeIdData(TypeIdData {
            data_hash: Byte32::from(ckb_blake2b_256(&binary)),
            data_size: 100,
        });
        assert_eq!(first, Some(Resolution::Ok(expected.clone())));
        assert_eq!(second, first);
        assert_eq!(explorer.cell_data_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_detail_is_retried() {
        let (explorer, displayer) = new_displayer(MockExplorer::default());
        let mut type_id = cell(1, &[], Some(type_id_script()));
        type_id.id = Some(Uint64(4));
        let mut expansion = displayer.expansion(type_id);

        expansion.toggle();
        let detail = expansion.fetch_detail_on_expand(&displayer).await;
        assert!(detail.is_some_and(Resolution::is_failed));
        expansion.fetch_detail_on_expand(&displayer).await;
        assert_eq!(explorer.cell_data_calls(), 2);
    }

    #[tokio::test]
    async fn test_expansion_serialization() {
        let (_, displayer) = new_displayer(MockExplorer::default());
        let mut expansion = displayer.expansion(cell(1, b"", Some(type_id_script())));
        assert_eq!(
            serde_json::to_value(&expansion).unwrap(),
            json!({ "tag": "type-id", "state": "collapsed" })
        );

        expansion.toggle();
        expansion.fetch_detail_on_expand(&displayer).await;
        let json = serde_json::to_value(&expansion).unwrap();
        assert_eq!(json["state"], "expanded");
        assert_eq!(json["detail"]["status"], "ok");
        assert_eq!(json["detail"]["value"]["kind"], "type-id-data");
        assert_eq!(json["detail"]["value"]["dataSize"], 0);
    }
}
