// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Address to bind the HTTP server to
    ///
    /// Env: CEX_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: CEX_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Maximum accepted request body size in bytes. Cell payloads travel in
    /// POST bodies, so this bounds the largest cell that can be decoded.
    ///
    /// Env: CEX_EXPRESS_REQUEST_LIMIT
    /// Default: 512000 (500kb)
    pub request_limit: usize,
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_request_limit() -> usize {
    512_000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if IpAddr::from_str(&self.bind_host).is_err() {
            return Err(ConfigError::ValidateError(format!(
                "Express bind host '{}' is not an IP address",
                self.bind_host
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.request_limit == 0 {
            return Err(ConfigError::ValidateError(
                "Express request limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            request_limit: default_request_limit(),
        }
    }
}
