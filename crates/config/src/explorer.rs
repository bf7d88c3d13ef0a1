// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;
use std::fmt;

/// CKB network the explorer is pointed at. Well-known script deployments
/// differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Public explorer API for this network.
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://mainnet-api.explorer.nervos.org/api/v1",
            Network::Testnet => "https://testnet-api.explorer.nervos.org/api/v1",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Network whose script tables are used for classification
    ///
    /// Env: CEX_EXPLORER_NETWORK
    /// Valid values: mainnet, testnet
    /// Default: mainnet
    pub network: Network,

    /// Base URL of the upstream explorer REST API
    ///
    /// Env: CEX_EXPLORER_API_URL
    /// Default: the public API of `network`
    pub api_url: String,

    /// Timeout for a single upstream request, in milliseconds
    ///
    /// Env: CEX_EXPLORER_REQUEST_TIMEOUT_MS
    /// Default: 10000
    pub request_timeout_ms: u64,

    /// How many cells of one list are rendered at the same time
    ///
    /// Env: CEX_EXPLORER_RENDER_CONCURRENCY
    /// Default: 8
    pub render_concurrency: usize,
}

pub(crate) fn default_request_timeout_ms() -> u64 {
    10_000
}

pub(crate) fn default_render_concurrency() -> usize {
    8
}

impl ExplorerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api_url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid explorer URL '{}': {}", self.api_url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid explorer URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Explorer request timeout cannot be 0".to_string(),
            ));
        }

        if self.render_concurrency == 0 {
            return Err(ConfigError::ValidateError(
                "Explorer render concurrency cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_url: Network::default().default_api_url().to_string(),
            request_timeout_ms: default_request_timeout_ms(),
            render_concurrency: default_render_concurrency(),
        }
    }
}
