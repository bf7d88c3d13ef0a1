// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explicit results for asynchronously resolved display fields, and the
//! keyed cache that coalesces the lookups behind them.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;

/// Outcome of resolving one display field.
///
/// Serialized as `{"status": "loading"}`, `{"status": "ok", "value": ..}`
/// or `{"status": "failed", "value": "<reason>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Resolution<T> {
    Loading,
    Ok(T),
    Failed(String),
}

impl<T> Resolution<T> {
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resolution::Ok(value),
            Err(err) => Resolution::Failed(err.to_string()),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Resolution::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resolution::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Resolution::Failed(_))
    }

    /// The value to display: the resolved value, or `fallback()` when the
    /// resolution failed. `None` while still loading.
    pub fn or_fallback(&self, fallback: impl FnOnce() -> T) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Resolution::Loading => None,
            Resolution::Ok(value) => Some(value.clone()),
            Resolution::Failed(_) => Some(fallback()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Loading => Resolution::Loading,
            Resolution::Ok(value) => Resolution::Ok(f(value)),
            Resolution::Failed(reason) => Resolution::Failed(reason),
        }
    }
}

/// Keyed read-through cache.
///
/// At most one fetch per key is in flight: concurrent callers for the same
/// key wait on it and share its value. A failed fetch leaves no entry, so a
/// later call fetches again. A bounded cache evicts some cached entry to
/// make room for a new key.
pub struct QueryCache<K, V> {
    entries: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
    capacity: Option<usize>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Cache holding at most `capacity` keys.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: Some(capacity.max(1)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Arc<OnceCell<V>>>> {
        // the map is never left half-updated, so a poisoned lock is still usable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn cell(&self, key: &K) -> Arc<OnceCell<V>> {
        let mut entries = self.lock();
        if let Some(cell) = entries.get(key) {
            return cell.clone();
        }
        if let Some(capacity) = self.capacity
            && entries.len() >= capacity
        {
            // in-flight fetches are never evicted
            let victim = entries
                .iter()
                .find(|(_, cell)| cell.initialized())
                .map(|(key, _)| key.clone());
            if let Some(victim) = victim {
                entries.remove(&victim);
            }
        }
        let cell = Arc::new(OnceCell::new());
        entries.insert(key.clone(), cell.clone());
        cell
    }

    /// Cached value for `key`, without fetching.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).and_then(|cell| cell.get().cloned())
    }

    /// Cached value for `key`, or the result of `fetch`.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = self.cell(&key);
        let result = cell.get_or_try_init(fetch).await.cloned();
        if result.is_err() {
            let mut entries = self.lock();
            if entries
                .get(&key)
                .is_some_and(|current| Arc::ptr_eq(current, &cell) && !current.initialized())
            {
                entries.remove(&key);
            }
        }
        result
    }

    /// Drop the entry of `key`.
    pub fn forget(&self, key: &K) {
        self.lock().remove(key);
    }

    /// Number of keys with a cached value.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|cell| cell.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
