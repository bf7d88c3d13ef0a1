// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// JSON file the UDT registry is persisted to between runs. The file is
    /// only an optimisation and may be deleted at any time.
    ///
    /// Env: CEX_REGISTRY_SNAPSHOT_PATH
    /// Default: unset (memory only)
    pub snapshot_path: Option<String>,

    /// Fetch the full UDT registry at startup instead of on the first miss
    ///
    /// Env: CEX_REGISTRY_PRELOAD
    /// Default: true
    pub preload: bool,
}

pub(crate) fn default_preload() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            preload: default_preload(),
        }
    }
}
