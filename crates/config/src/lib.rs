// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod explorer;
mod express;
mod log;
mod metrics;
mod registry;

pub use args::Args;
pub use error::ConfigError;
pub use explorer::{ExplorerConfig, Network};
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};
pub use registry::RegistryConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "CEX_";

/// Flat view of the environment, as `envy` sees it.
///
/// `CEX_EXPRESS_PORT` lands in `express_port`, `CEX_LOG_LEVEL` in `log_level`
/// and so on. [`ExplorerCellsConfig::from_env`] folds it into sections.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,
    #[serde(default = "express::default_request_limit")]
    express_request_limit: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default)]
    explorer_network: Network,
    #[serde(default)]
    explorer_api_url: Option<String>,
    #[serde(default = "explorer::default_request_timeout_ms")]
    explorer_request_timeout_ms: u64,
    #[serde(default = "explorer::default_render_concurrency")]
    explorer_render_concurrency: usize,

    #[serde(default)]
    registry_snapshot_path: Option<String>,
    #[serde(default = "registry::default_preload")]
    registry_preload: bool,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prometheus_prefix")]
    metrics_prometheus_prefix: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerCellsConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub explorer: ExplorerConfig,
    pub registry: RegistryConfig,
    pub metrics: MetricsConfig,
}

impl ExplorerCellsConfig {
    /// Load the configuration from `CEX_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load `env_file` into the process environment (if it exists), then
    /// read the configuration from the environment.
    ///
    /// Variables that are already set win over the file.
    pub fn from_env_file(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = env_file.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.explorer.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

impl From<EnvConfig> for ExplorerCellsConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
                request_limit: env.express_request_limit,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            explorer: ExplorerConfig {
                network: env.explorer_network,
                api_url: env
                    .explorer_api_url
                    .unwrap_or_else(|| env.explorer_network.default_api_url().to_string()),
                request_timeout_ms: env.explorer_request_timeout_ms,
                render_concurrency: env.explorer_render_concurrency,
            },
            registry: RegistryConfig {
                snapshot_path: env.registry_snapshot_path.filter(|p| !p.is_empty()),
                preload: env.registry_preload,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
            },
        }
    }
}
