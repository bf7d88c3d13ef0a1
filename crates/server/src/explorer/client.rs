// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};

use config::ExplorerConfig;

use super::{CollectionMatch, ExplorerApi, ExplorerError, ExplorerFuture};
use crate::consts::NFT_COLLECTION_FILTER;
use crate::metrics::registry::UPSTREAM_REQUEST_DURATION_SECONDS;
use crate::types::{Byte32, HexBytes, TransactionCells};
use crate::udt_registry::UdtInfo;

const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Longest upstream error body kept in [`ExplorerError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Deserialize)]
struct CellOutputData {
    data: HexBytes,
}

/// [`ExplorerApi`] over the explorer's HTTP API.
#[derive(Clone)]
pub struct HttpExplorerClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExplorerClient {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ExplorerError> {
        let start = Instant::now();
        let result = self.fetch(path, query).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(err) if err.is_not_found() => "not_found",
            Err(_) => "error",
        };
        UPSTREAM_REQUEST_DURATION_SECONDS
            .with_label_values(&[endpoint, outcome])
            .observe(start.elapsed().as_secs_f64());
        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ExplorerError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ExplorerError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(ExplorerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ExplorerError::Decode(e.to_string()))?;
        serde_json::from_value(strip_document(value))
            .map_err(|e| ExplorerError::Decode(e.to_string()))
    }
}

/// Unwrap a JSON:API document (`{"data": {"attributes": ..}}` or
/// `{"data": [{"attributes": ..}, ..]}`) down to its attributes. Bare
/// payloads pass through unchanged.
fn strip_document(value: Value) -> Value {
    let value = match value {
        Value::Object(mut map)
            if matches!(map.get("data"), Some(Value::Object(_) | Value::Array(_))) =>
        {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(strip_resource).collect()),
        other => strip_resource(other),
    }
}

fn strip_resource(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("attributes").is_some_and(Value::is_object) => {
            map.remove("attributes").unwrap_or_default()
        }
        other => other,
    }
}

/// Search results come back as a single resource or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl ExplorerApi for HttpExplorerClient {
    fn udt_registry(&self) -> ExplorerFuture<'_, Vec<UdtInfo>> {
        Box::pin(async move { self.get_json("udt_registry", "/udts/registry", &[]).await })
    }

    fn search_cluster(&self, cluster_id: Byte32) -> ExplorerFuture<'_, CollectionMatch> {
        Box::pin(async move {
            let query = [
                ("q", cluster_id.to_string()),
                ("filter_by", NFT_COLLECTION_FILTER.to_string()),
            ];
            let found: OneOrMany<CollectionMatch> = self
                .get_json("suggest_queries", "/suggest_queries", &query)
                .await?;
            match found {
                OneOrMany::One(collection) => Ok(collection),
                OneOrMany::Many(collections) => collections
                    .into_iter()
                    .next()
                    .ok_or_else(|| ExplorerError::NotFound(format!("cluster {}", cluster_id))),
            }
        })
    }

    fn cell_output_data(&self, id: u64) -> ExplorerFuture<'_, HexBytes> {
        Box::pin(async move {
            let path = format!("/cell_output_data/{}", id);
            let output: CellOutputData = self.get_json("cell_output_data", &path, &[]).await?;
            Ok(output.data)
        })
    }

    fn transaction_cells(&self, tx_hash: Byte32) -> ExplorerFuture<'_, TransactionCells> {
        Box::pin(async move {
            let path = format!("/transactions/{}", tx_hash);
            self.get_json("transactions", &path, &[]).await
        })
    }
}
