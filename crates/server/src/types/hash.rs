// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HexError;

/// Wrapper type for 32-byte hashes (code hashes, type hashes, cluster ids,
/// transaction hashes) with controlled string representation.
///
/// Always rendered as "0x" followed by 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Byte32(pub H256);

impl Byte32 {
    pub fn new(hash: H256) -> Self {
        Self(hash)
    }

    /// Get the hash as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_fixed_bytes()
    }

    /// Parse a hex string with or without the "0x" prefix.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let mut bytes = [0u8; 32];
        decode_fixed(s, &mut bytes)?;
        Ok(Self(H256::from(bytes)))
    }

    /// Build from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        (bytes.len() == 32).then(|| Self(H256::from_slice(bytes)))
    }

    /// Compare against a hex literal without allocating. Invalid literals
    /// never match.
    pub fn matches_hex(&self, s: &str) -> bool {
        let mut bytes = [0u8; 32];
        decode_fixed(s, &mut bytes).is_ok() && &bytes == self.as_bytes()
    }

    /// Last four hex characters, used to tell unnamed tokens apart.
    pub fn short_suffix(&self) -> String {
        hex::encode(&self.as_bytes()[30..])
    }
}

fn decode_fixed(s: &str, out: &mut [u8; 32]) -> Result<(), HexError> {
    let hex_str = s.strip_prefix("0x").unwrap_or(s);
    if hex_str.len() != 64 {
        return Err(HexError::InvalidLength {
            expected: 32,
            got: hex_str.len() / 2,
        });
    }
    hex::decode_to_slice(hex_str, out).map_err(HexError::from)
}

impl From<H256> for Byte32 {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl From<[u8; 32]> for Byte32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(H256::from(bytes))
    }
}

impl FromStr for Byte32 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Byte32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

impl Serialize for Byte32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from hex string (with or without "0x" prefix)
impl<'de> Deserialize<'de> for Byte32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
