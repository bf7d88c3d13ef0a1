// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection and the `/metrics` routes
    ///
    /// Env: CEX_METRICS_ENABLED
    /// Default: false
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: CEX_METRICS_PROMETHEUS_PREFIX
    /// Default: ckb_explorer_cells
    pub prometheus_prefix: String,
}

pub(crate) fn default_prometheus_prefix() -> String {
    "ckb_explorer_cells".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: default_prometheus_prefix(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        // Prometheus silently drops metrics whose names don't match
        // [a-zA-Z_:][a-zA-Z0-9_:]*
        let mut chars = self.prometheus_prefix.chars();
        if let Some(first) = chars.next() {
            let first_ok = first.is_ascii_alphabetic() || first == '_' || first == ':';
            let rest_ok = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == ':');
            if !first_ok || !rest_ok {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
        }

        Ok(())
    }
}
