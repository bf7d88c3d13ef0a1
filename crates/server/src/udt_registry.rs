// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-through cache of UDT registry metadata.
//!
//! This module provides:
//! - `UdtInfo`: display metadata of a token, keyed by its type script hash
//! - `UdtRegistry`: synchronous lookups over a map that is filled in bulk
//!   from the explorer's registry endpoint, optionally persisted to a JSON
//!   snapshot file

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use config::RegistryConfig;

use crate::consts::{DEFAULT_UDT_ICON, MAX_DECIMAL_PLACES};
use crate::explorer::{ExplorerApi, ExplorerError};
use crate::metrics::record_resolution;
use crate::metrics::registry::REGISTRY_LOOKUPS;
use crate::resolve::{QueryCache, Resolution};
use crate::types::{Byte32, Uint64};

/// Registered metadata of one UDT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtInfo {
    #[serde(alias = "type_hash")]
    pub type_hash: Byte32,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, alias = "full_name")]
    pub name: String,
    #[serde(default, alias = "icon_file")]
    pub icon: String,
    #[serde(
        default,
        alias = "decimal_places",
        alias = "decimal",
        deserialize_with = "deserialize_decimal_places"
    )]
    pub decimal_places: u32,
}

fn deserialize_decimal_places<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Uint64>::deserialize(deserializer)?.unwrap_or_default();
    Ok(value.value().min(MAX_DECIMAL_PLACES as u64) as u32)
}

impl UdtInfo {
    /// Metadata shown for a token the registry doesn't know.
    pub fn fallback(type_hash: &Byte32) -> Self {
        let label = format!("Unknown UDT (#{})", type_hash.short_suffix());
        Self {
            type_hash: *type_hash,
            symbol: label.clone(),
            name: label,
            icon: DEFAULT_UDT_ICON.to_string(),
            decimal_places: 0,
        }
    }

    /// Icon to render, with the default for entries registered without one.
    pub fn icon_or_default(&self) -> &str {
        if self.icon.is_empty() {
            DEFAULT_UDT_ICON
        } else {
            &self.icon
        }
    }
}

/// Registry of UDT metadata, shared by every renderer.
///
/// Reads never wait on the network: [`UdtRegistry::get`] only consults the
/// in-memory map. [`UdtRegistry::resolve`] additionally loads the whole
/// registry once on a miss; concurrent misses share that single load.
pub struct UdtRegistry {
    entries: RwLock<HashMap<Byte32, UdtInfo>>,
    explorer: Arc<dyn ExplorerApi>,
    bulk_load: QueryCache<(), usize>,
    snapshot_path: Option<PathBuf>,
}

impl UdtRegistry {
    pub fn new(explorer: Arc<dyn ExplorerApi>, snapshot_path: Option<PathBuf>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            explorer,
            bulk_load: QueryCache::new(),
            snapshot_path,
        }
    }

    pub fn from_config(explorer: Arc<dyn ExplorerApi>, config: &RegistryConfig) -> Self {
        Self::new(explorer, config.snapshot_path.as_ref().map(PathBuf::from))
    }

    fn lookup(&self, type_hash: &Byte32) -> Option<UdtInfo> {
        let entries = self.entries.read().ok()?;
        entries.get(type_hash).cloned()
    }

    /// Registered metadata for `type_hash`, if already loaded.
    pub fn get(&self, type_hash: &Byte32) -> Option<UdtInfo> {
        let info = self.lookup(type_hash);
        let result = if info.is_some() { "hit" } else { "miss" };
        REGISTRY_LOOKUPS.with_label_values(&[result]).inc();
        info
    }

    /// Insert or overwrite `entries`. Returns how many were written.
    pub fn populate(&self, entries: impl IntoIterator<Item = UdtInfo>) -> usize {
        let Ok(mut map) = self.entries.write() else {
            return 0;
        };
        let mut written = 0;
        for info in entries {
            map.insert(info.type_hash, info);
            written += 1;
        }
        written
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the whole registry from the explorer and populate the map.
    ///
    /// Succeeds at most once per process; after a failure the next call
    /// fetches again.
    pub async fn load(&self) -> Result<usize, ExplorerError> {
        self.bulk_load
            .get_or_fetch((), || async {
                let entries = self.explorer.udt_registry().await?;
                let count = self.populate(entries);
                tracing::info!("Loaded {} UDT registry entries", count);
                self.save_snapshot().await;
                Ok::<_, ExplorerError>(count)
            })
            .await
    }

    /// Registered metadata for `type_hash`, loading the registry on a miss.
    pub async fn resolve(&self, type_hash: &Byte32) -> Resolution<UdtInfo> {
        let resolution = match self.get(type_hash) {
            Some(info) => Resolution::Ok(info),
            None => match self.load().await {
                Ok(_) => match self.lookup(type_hash) {
                    Some(info) => Resolution::Ok(info),
                    None => Resolution::Failed("not registered".to_string()),
                },
                Err(err) => {
                    tracing::warn!("UDT registry load failed: {}", err);
                    Resolution::Failed(err.to_string())
                }
            },
        };
        let outcome = if resolution.is_failed() { "failed" } else { "ok" };
        record_resolution("udt", outcome);
        resolution
    }

    /// Seed the map from the snapshot file, if configured and readable.
    /// Returns the number of entries read.
    pub async fn load_snapshot(&self) -> usize {
        let Some(path) = &self.snapshot_path else {
            return 0;
        };
        match read_snapshot(path).await {
            Ok(entries) => {
                let count = self.populate(entries);
                tracing::info!("Read {} UDT entries from {}", count, path.display());
                count
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => {
                tracing::warn!("Ignoring UDT snapshot {}: {}", path.display(), err);
                0
            }
        }
    }

    /// Rewrite the snapshot file with the current map. Failures are logged.
    pub async fn save_snapshot(&self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        let mut entries: Vec<UdtInfo> = match self.entries.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => return,
        };
        entries.sort_by_key(|info| info.type_hash);

        if let Err(err) = write_snapshot(path, &entries).await {
            tracing::warn!("Failed to write UDT snapshot {}: {}", path.display(), err);
        }
    }

    /// Startup load of the full registry. Failures are logged.
    pub async fn preload(&self) {
        if let Err(err) = self.load().await {
            tracing::warn!("UDT registry preload failed: {}", err);
        }
    }
}

async fn read_snapshot(path: &Path) -> std::io::Result<Vec<UdtInfo>> {
    let raw = tokio::fs::read(path).await?;
    serde_json::from_slice(&raw).map_err(std::io::Error::other)
}

async fn write_snapshot(path: &Path, entries: &[UdtInfo]) -> std::io::Result<()> {
    let raw = serde_json::to_vec_pretty(entries).map_err(std::io::Error::other)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, raw).await?;
    tokio::fs::rename(&tmp, path).await
}
