// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rich display of transaction cells.
//!
//! [`CellDisplayer`] turns a [`Cell`] into a [`CellDisplay`]: the decode tag
//! picks the variant, decoding fills the synchronous fields, and registry or
//! cluster lookups fill the rest. A failed lookup only degrades its own
//! field to a fallback value; rendering a cell never fails.

pub mod expansion;

pub use expansion::{CellDetail, CellExpansion, ExpandState, SporeCover, TypeIdData};

use serde::Serialize;
use std::sync::Arc;

use config::Network;

use crate::consts::{UNIQUE_ITEMS_NAME, scripts};
use crate::decoder::{
    DataParseUnit, DecodeTag, DecodedContent, SporeContent, SporeDpu, decode_cell, parse_type,
};
use crate::explorer::{CollectionMatch, ExplorerApi};
use crate::metrics::{record_classification, record_resolution};
use crate::resolve::{QueryCache, Resolution};
use crate::types::{Byte32, Cell, HexBytes, serialize_u128_str};
use crate::udt_registry::{UdtInfo, UdtRegistry};
use crate::utils::{format_decimal, run_with_concurrency_ordered, shannons_to_ckb};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CkbDisplay {
    pub capacity: String,
    /// A plain cell carrying data, which is unusual enough to flag.
    pub has_extra_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtDisplay {
    pub type_hash: Byte32,
    #[serde(serialize_with = "serialize_u128_str")]
    pub amount_raw: u128,
    pub capacity: String,
    /// Registry lookup outcome.
    pub metadata: Resolution<UdtInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `amount_raw` shifted by the token's decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl UdtDisplay {
    fn apply(&mut self, metadata: Resolution<UdtInfo>) {
        let type_hash = self.type_hash;
        if let Some(info) = metadata.or_fallback(|| UdtInfo::fallback(&type_hash)) {
            self.symbol = Some(info.symbol.clone());
            self.icon = Some(info.icon_or_default().to_string());
            self.amount = Some(format_decimal(self.amount_raw, info.decimal_places));
        }
        self.metadata = metadata;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaoLabel {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoDisplay {
    pub label: DaoLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SporeDisplay {
    pub content_type: String,
    pub content_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<Byte32>,
    pub capacity: String,
    /// Cluster search outcome.
    pub cluster: Resolution<CollectionMatch>,
    /// Collection to show: the resolved cluster, or "Unique items".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionMatch>,
}

impl SporeDisplay {
    fn fill(&mut self, content: SporeContent) {
        self.content_type = content.content_type;
        self.content_size = content.content_size;
        self.cluster_id = content.cluster_id;
    }

    fn apply(&mut self, cluster: Resolution<CollectionMatch>, unique_items: CollectionMatch) {
        self.collection = cluster.or_fallback(|| unique_items);
        self.cluster = cluster;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDisplay {
    pub name: String,
    pub description: String,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeIdDisplay {
    pub type_hash: Byte32,
    pub args: HexBytes,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownDisplay {
    pub capacity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_hash: Option<Byte32>,
}

/// One view per decode tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CellDisplay {
    Ckb(CkbDisplay),
    Udt(UdtDisplay),
    Dao(DaoDisplay),
    Spore(SporeDisplay),
    SporeCluster(ClusterDisplay),
    TypeId(TypeIdDisplay),
    Unknown(UnknownDisplay),
}

impl CellDisplay {
    /// One-line summary of the cell, e.g. `1000 CKB` or `DAO Deposit`.
    pub fn title(&self) -> String {
        match self {
            CellDisplay::Ckb(ckb) => format!("{} CKB", ckb.capacity),
            CellDisplay::Udt(udt) => match (&udt.amount, &udt.symbol) {
                (Some(amount), Some(symbol)) => format!("{} {}", amount, symbol),
                _ => "UDT".to_string(),
            },
            CellDisplay::Dao(dao) => match dao.label {
                DaoLabel::Deposit => "DAO Deposit".to_string(),
                DaoLabel::Withdraw => "DAO Withdraw".to_string(),
            },
            CellDisplay::Spore(spore) => spore
                .collection
                .as_ref()
                .map(|c| c.collection_name.clone())
                .unwrap_or_else(|| "Spore".to_string()),
            CellDisplay::SporeCluster(cluster) if !cluster.name.is_empty() => cluster.name.clone(),
            CellDisplay::SporeCluster(_) => "Spore Cluster".to_string(),
            CellDisplay::TypeId(_) => "Type ID".to_string(),
            CellDisplay::Unknown(_) => "Unknown Cell Type".to_string(),
        }
    }

    /// Whether some field is still waiting on a lookup.
    pub fn is_pending(&self) -> bool {
        match self {
            CellDisplay::Udt(udt) => udt.metadata.is_loading(),
            CellDisplay::Spore(spore) => spore.cluster.is_loading(),
            _ => false,
        }
    }
}

/// A rendered cell with its tag and title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCell {
    pub tag: DecodeTag,
    pub title: String,
    #[serde(flatten)]
    pub display: CellDisplay,
}

impl RenderedCell {
    fn new(tag: DecodeTag, display: CellDisplay) -> Self {
        Self {
            tag,
            title: display.title(),
            display,
        }
    }
}

const CLUSTER_CACHE_ENTRIES: usize = 4096;
const CELL_DATA_CACHE_ENTRIES: usize = 256;
/// Larger payloads are fetched on every request instead of cached.
const MAX_CACHED_CELL_DATA: usize = 64 * 1024;

/// Renders cells for one network, sharing lookups between renders.
pub struct CellDisplayer {
    network: Network,
    explorer: Arc<dyn ExplorerApi>,
    registry: Arc<UdtRegistry>,
    clusters: QueryCache<Byte32, CollectionMatch>,
    cell_data: QueryCache<u64, HexBytes>,
    concurrency: usize,
}

impl CellDisplayer {
    pub fn new(
        network: Network,
        explorer: Arc<dyn ExplorerApi>,
        registry: Arc<UdtRegistry>,
        concurrency: usize,
    ) -> Self {
        Self {
            network,
            explorer,
            registry,
            clusters: QueryCache::bounded(CLUSTER_CACHE_ENTRIES),
            cell_data: QueryCache::bounded(CELL_DATA_CACHE_ENTRIES),
            concurrency,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn registry(&self) -> &UdtRegistry {
        &self.registry
    }

    /// The "Unique items" pseudo collection of this network.
    pub fn unique_items(&self) -> CollectionMatch {
        let sentinel = scripts(self.network).unique_items_collection;
        CollectionMatch {
            collection_name: UNIQUE_ITEMS_NAME.to_string(),
            type_script_hash: Byte32::from_hex(sentinel).unwrap_or_default(),
        }
    }

    /// Classify and decode `cell` without any lookup. Fields that need one
    /// are [`Resolution::Loading`].
    pub fn render_pending(&self, cell: &Cell) -> RenderedCell {
        let (tag, decoded) = decode_cell(cell, self.network);
        record_classification(tag.as_str());
        let capacity = shannons_to_ckb(cell.capacity.value());
        let script = cell.type_script.as_ref().and_then(|s| s.script());

        let display = match (decoded, script) {
            (Some(decoded), Some(script)) => match decoded.content {
                DecodedContent::Udt(udt) => CellDisplay::Udt(UdtDisplay {
                    type_hash: script.calc_script_hash(),
                    amount_raw: udt.amount,
                    capacity,
                    metadata: Resolution::Loading,
                    symbol: None,
                    icon: None,
                    amount: None,
                }),
                DecodedContent::Dao(dao) => CellDisplay::Dao(DaoDisplay {
                    label: if dao.is_withdraw() {
                        DaoLabel::Withdraw
                    } else {
                        DaoLabel::Deposit
                    },
                    block_number: dao.block_number,
                    capacity,
                }),
                DecodedContent::Spore(spore) => {
                    let mut display = SporeDisplay {
                        content_type: spore.content_type,
                        content_size: spore.content_size,
                        cluster_id: spore.cluster_id,
                        capacity,
                        cluster: Resolution::Loading,
                        collection: None,
                    };
                    // unclustered spores need no lookup, unless the data was elided
                    if spore.cluster_id.is_none() && cell.elided_data_id().is_none() {
                        let unique_items = self.unique_items();
                        display.apply(Resolution::Ok(unique_items.clone()), unique_items);
                    }
                    CellDisplay::Spore(display)
                }
                DecodedContent::SporeCluster(cluster) => CellDisplay::SporeCluster(ClusterDisplay {
                    name: cluster.name,
                    description: cluster.description,
                    capacity,
                }),
                DecodedContent::TypeId(_) => CellDisplay::TypeId(TypeIdDisplay {
                    type_hash: script.calc_script_hash(),
                    args: script.args.clone(),
                    capacity,
                }),
            },
            _ if tag == DecodeTag::None => CellDisplay::Ckb(CkbDisplay {
                capacity,
                has_extra_data: cell.has_data(),
            }),
            _ => CellDisplay::Unknown(UnknownDisplay {
                capacity,
                code_hash: script.map(|s| s.code_hash),
            }),
        };

        RenderedCell::new(tag, display)
    }

    /// Render `cell`, resolving registry metadata and cluster names.
    pub async fn render(&self, cell: &Cell) -> RenderedCell {
        let mut rendered = self.render_pending(cell);
        match &mut rendered.display {
            CellDisplay::Udt(udt) => {
                let metadata = self.registry.resolve(&udt.type_hash).await;
                udt.apply(metadata);
            }
            CellDisplay::Spore(spore) => {
                if let Some(id) = cell.elided_data_id() {
                    match self.fetch_cell_data(id).await {
                        Resolution::Ok(data) => spore.fill(SporeDpu::parse(data.as_slice())),
                        Resolution::Failed(reason) => {
                            spore.apply(Resolution::Failed(reason), self.unique_items())
                        }
                        Resolution::Loading => {}
                    }
                }
                if spore.cluster.is_loading() {
                    let cluster = match spore.cluster_id {
                        Some(cluster_id) => self.resolve_cluster(cluster_id).await,
                        None => Resolution::Ok(self.unique_items()),
                    };
                    spore.apply(cluster, self.unique_items());
                }
            }
            _ => {}
        }
        rendered.title = rendered.display.title();
        rendered
    }

    /// Render every cell, at most `concurrency` at a time, in input order.
    pub async fn render_all(&self, cells: &[Cell]) -> Vec<RenderedCell> {
        run_with_concurrency_ordered(self.concurrency, cells.iter().map(|cell| self.render(cell)))
            .await
    }

    /// Collection of the cluster `cluster_id`, searched once per id.
    pub async fn resolve_cluster(&self, cluster_id: Byte32) -> Resolution<CollectionMatch> {
        let result = self
            .clusters
            .get_or_fetch(cluster_id, || self.explorer.search_cluster(cluster_id))
            .await;
        match &result {
            Ok(_) => record_resolution("cluster", "ok"),
            Err(err) => {
                tracing::debug!("Cluster {} not resolved: {}", cluster_id, err);
                record_resolution("cluster", "failed");
            }
        }
        Resolution::from_result(result)
    }

    /// Full data of the cell with explorer id `id`. Payloads up to
    /// [`MAX_CACHED_CELL_DATA`] bytes are fetched once per id.
    pub async fn fetch_cell_data(&self, id: u64) -> Resolution<HexBytes> {
        let result = self
            .cell_data
            .get_or_fetch(id, || self.explorer.cell_output_data(id))
            .await;
        match &result {
            Ok(data) => {
                if data.len() > MAX_CACHED_CELL_DATA {
                    self.cell_data.forget(&id);
                }
                record_resolution("cell_data", "ok");
            }
            Err(err) => {
                tracing::debug!("Cell data {} not fetched: {}", id, err);
                record_resolution("cell_data", "failed");
            }
        }
        Resolution::from_result(result)
    }

    /// Create the expand/collapse state of `cell`.
    pub fn expansion(&self, cell: Cell) -> CellExpansion {
        let tag = parse_type(cell.type_script.as_ref(), self.network);
        CellExpansion::new(cell, tag)
    }
}
