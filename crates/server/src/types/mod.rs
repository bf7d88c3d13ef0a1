// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common type wrappers for API requests and responses
//!
//! This module contains newtype wrappers around primitive types to provide
//! consistent formatting and serialization across the API, plus the cell and
//! script shapes returned by the explorer API.

pub mod cell;
pub mod hash;
pub mod script;

pub use cell::{Cell, TransactionCells};
pub use hash::Byte32;
pub use script::{HashType, Script, TypeScript};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// A "0x"-prefixed hex byte string, as cell data and script args travel in
/// the explorer API.
///
/// `""` and `"0x"` are both the canonical empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FromStr for HexBytes {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self(hex::decode(hex_str)?))
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A `u64` that the explorer API sends either as a JSON number or as a
/// decimal string (capacities, cell ids). Always serialized as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uint64(pub u64);

impl Uint64 {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Uint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uint64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Uint64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(u64),
            String(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(Self(n)),
            NumberOrString::String(s) => {
                let parsed = match s.strip_prefix("0x") {
                    Some(hex_str) => u64::from_str_radix(hex_str, 16),
                    None => s.parse(),
                };
                parsed
                    .map(Self)
                    .map_err(|e| serde::de::Error::custom(format!("invalid u64 '{}': {}", s, e)))
            }
        }
    }
}

/// Serialize a `u128` as a decimal string. Token amounts exceed what JSON
/// consumers can hold in a double.
pub fn serialize_u128_str<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_bytes_empty_forms() {
        let empty: HexBytes = serde_json::from_str("\"0x\"").unwrap();
        assert!(empty.is_empty());
        let empty: HexBytes = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());
        assert_eq!(HexBytes::default().to_string(), "0x");
    }

    #[test]
    fn test_hex_bytes_rejects_odd_length() {
        assert!(serde_json::from_str::<HexBytes>("\"0x123\"").is_err());
        assert!(serde_json::from_str::<HexBytes>("\"0xzz\"").is_err());
    }

    #[test]
    fn test_hex_bytes_round_trip() {
        let bytes: HexBytes = "0x00ff10".parse().unwrap();
        assert_eq!(bytes.as_slice(), &[0x00, 0xff, 0x10]);
        assert_eq!(serde_json::to_string(&bytes).unwrap(), "\"0x00ff10\"");
    }

    #[test]
    fn test_uint64_accepts_number_decimal_and_hex() {
        let n: Uint64 = serde_json::from_str("100000000000").unwrap();
        assert_eq!(n.value(), 100_000_000_000);
        let s: Uint64 = serde_json::from_str("\"100000000000\"").unwrap();
        assert_eq!(s.value(), 100_000_000_000);
        let h: Uint64 = serde_json::from_str("\"0x174876e800\"").unwrap();
        assert_eq!(h.value(), 100_000_000_000);
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"100000000000\"");
    }

    #[test]
    fn test_uint64_rejects_garbage() {
        assert!(serde_json::from_str::<Uint64>("\"lots\"").is_err());
        assert!(serde_json::from_str::<Uint64>("-1").is_err());
    }
}
