// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::{Byte32, HexBytes};
use crate::utils::{hash::ckb_blake2b_256, molecule};

/// How a script's `code_hash` refers to its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    Data,
    Type,
    Data1,
    Data2,
}

impl HashType {
    /// Molecule byte value of the hash type.
    pub fn as_byte(self) -> u8 {
        match self {
            HashType::Data => 0,
            HashType::Type => 1,
            HashType::Data1 => 2,
            HashType::Data2 => 4,
        }
    }
}

/// A reference to an on-chain verification program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(alias = "code_hash")]
    pub code_hash: Byte32,
    #[serde(alias = "hash_type")]
    pub hash_type: HashType,
    #[serde(default)]
    pub args: HexBytes,
}

impl Script {
    pub fn new(code_hash: Byte32, hash_type: HashType, args: impl Into<HexBytes>) -> Self {
        Self {
            code_hash,
            hash_type,
            args: args.into(),
        }
    }

    /// Molecule `Script` table: `code_hash: Byte32, hash_type: byte, args: Bytes`.
    pub fn to_molecule(&self) -> Vec<u8> {
        let hash_type = [self.hash_type.as_byte()];
        let args = molecule::pack_bytes(self.args.as_slice());
        molecule::pack_table(&[
            self.code_hash.as_bytes().as_slice(),
            hash_type.as_slice(),
            args.as_slice(),
        ])
    }

    /// The script hash used as lookup key by the UDT registry and NFT
    /// collections.
    pub fn calc_script_hash(&self) -> Byte32 {
        Byte32::from(ckb_blake2b_256(&self.to_molecule()))
    }
}

/// A cell's type script as received. Anything that doesn't parse as a
/// [`Script`] is kept as-is so it can still be displayed as an unknown type
/// instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeScript {
    Script(Script),
    Malformed(serde_json::Value),
}

impl TypeScript {
    pub fn script(&self) -> Option<&Script> {
        match self {
            TypeScript::Script(script) => Some(script),
            TypeScript::Malformed(_) => None,
        }
    }
}

impl From<Script> for TypeScript {
    fn from(script: Script) -> Self {
        TypeScript::Script(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn script(args: &[u8]) -> Script {
        Script::new(Byte32::from([0x11; 32]), HashType::Type, args)
    }

    #[test]
    fn test_script_molecule_layout() {
        let encoded = script(&[0xaa, 0xbb]).to_molecule();
        // header (4 + 3 * 4) + code_hash 32 + hash_type 1 + args (4 + 2)
        assert_eq!(encoded.len(), 16 + 32 + 1 + 6);
        assert_eq!(&encoded[0..4], &(55u32).to_le_bytes());
        assert_eq!(&encoded[4..8], &(16u32).to_le_bytes());
        assert_eq!(&encoded[8..12], &(48u32).to_le_bytes());
        assert_eq!(&encoded[12..16], &(49u32).to_le_bytes());
        assert_eq!(encoded[48], 1);
        assert_eq!(&encoded[49..53], &(2u32).to_le_bytes());
    }

    #[test]
    fn test_script_hash_depends_on_every_field() {
        let base = script(&[]).calc_script_hash();
        assert_eq!(base, script(&[]).calc_script_hash());
        assert_ne!(base, script(&[0]).calc_script_hash());

        let mut data_hash_type = script(&[]);
        data_hash_type.hash_type = HashType::Data1;
        assert_ne!(base, data_hash_type.calc_script_hash());
    }

    #[test]
    fn test_script_accepts_snake_case_and_missing_args() {
        let parsed: Script = serde_json::from_value(json!({
            "code_hash": format!("0x{}", "11".repeat(32)),
            "hash_type": "data1",
        }))
        .unwrap();
        assert_eq!(parsed.hash_type, HashType::Data1);
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_malformed_type_script_is_kept() {
        let parsed: TypeScript = serde_json::from_value(json!({ "codeHash": "0x12" })).unwrap();
        assert!(parsed.script().is_none());

        let parsed: TypeScript = serde_json::from_value(json!({
            "codeHash": format!("0x{}", "11".repeat(32)),
            "hashType": "type",
            "args": "0x"
        }))
        .unwrap();
        assert_eq!(parsed.script(), Some(&script(&[])));
    }
}
