// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Well-known script deployments, per network.

use config::Network;

use crate::types::{HashType, Script};

/// Decimal places of CKB capacity (1 CKB = 10^8 shannons).
pub const CKB_DECIMALS: u32 = 8;

/// Most decimal places a `u128` amount can use: the digits of `u128::MAX`.
pub const MAX_DECIMAL_PLACES: u32 = 39;

/// Icon shown for tokens without registry metadata.
pub const DEFAULT_UDT_ICON: &str = "/images/tokens/unknown_token.svg";

/// Display name of the pseudo collection holding spores without a cluster.
pub const UNIQUE_ITEMS_NAME: &str = "Unique items";

/// `filter_by` code of `suggest_queries` restricting results to NFT
/// collections.
pub const NFT_COLLECTION_FILTER: u8 = 4;

/// Code hash reserved for the Type ID system script ("TYPE_ID").
pub const TYPE_ID_CODE_HASH: &str =
    "0x00000000000000000000000000000000000000000000000000545950455f4944";

/// Length of the commitment a Type ID script carries in its args.
pub const TYPE_ID_ARGS_LEN: usize = 32;

/// A deployed script, identified by code hash and hash type.
#[derive(Debug, Clone, Copy)]
pub struct KnownScript {
    pub name: &'static str,
    pub code_hash: &'static str,
    pub hash_type: HashType,
}

impl KnownScript {
    pub const fn new(name: &'static str, code_hash: &'static str, hash_type: HashType) -> Self {
        Self {
            name,
            code_hash,
            hash_type,
        }
    }

    /// Exact `(code_hash, hash_type)` match. Args are not considered.
    pub fn matches(&self, script: &Script) -> bool {
        script.hash_type == self.hash_type && script.code_hash.matches_hex(self.code_hash)
    }
}

/// Script tables of one network.
#[derive(Debug)]
pub struct ScriptTable {
    pub udt: &'static [KnownScript],
    pub dao: KnownScript,
    pub spore: &'static [KnownScript],
    pub spore_cluster: &'static [KnownScript],
    /// Hash reported for the "Unique items" pseudo collection. It is not an
    /// on-chain script hash: the values are fixed placeholders, chosen only to
    /// be stable and distinct per network.
    pub unique_items_collection: &'static str,
}

const NERVOS_DAO: KnownScript = KnownScript::new(
    "Nervos DAO",
    "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e",
    HashType::Type,
);

pub static MAINNET_SCRIPTS: ScriptTable = ScriptTable {
    udt: &[
        KnownScript::new(
            "sUDT",
            "0x5e7a36a77e68eecc013dfa2fe6a23f3b6c344b04005808694ae6dd45eea4cfd5",
            HashType::Type,
        ),
        KnownScript::new(
            "xUDT",
            "0x50bd8d6680b8b9cf98b73f3c08faf8b2a21914311954118ad6609be6e78a1b95",
            HashType::Data1,
        ),
    ],
    dao: NERVOS_DAO,
    spore: &[KnownScript::new(
        "Spore",
        "0x4a4dce1df3dffff7f8b2cd7dff7303df3b6150c9788cb75dcf6747247132b9f5",
        HashType::Data1,
    )],
    spore_cluster: &[KnownScript::new(
        "Spore Cluster",
        "0x7366a61534fa7c7e6225ecc0d828ea3b5366adec2b58206f2ee84995fe030075",
        HashType::Data1,
    )],
    unique_items_collection: "0x0000000000000000000000000000000000000000000000000000000000000000",
};

pub static TESTNET_SCRIPTS: ScriptTable = ScriptTable {
    udt: &[
        KnownScript::new(
            "sUDT",
            "0xc5e5dcf215925f7ef4dfaf5f4b4f105bc321c02776d6e7d52a1db3fcd9d011a4",
            HashType::Type,
        ),
        KnownScript::new(
            "xUDT",
            "0x25c29dc317811a6f6f3985a7a9ebc4838bd388d19d0feeecf0bcd60f6c0975bb",
            HashType::Type,
        ),
    ],
    dao: NERVOS_DAO,
    spore: &[
        KnownScript::new(
            "Spore v1",
            "0x5e063b4c0e7abeaa6a428df3b693521a3050934cf3b0ae97a800d1bc31449398",
            HashType::Data1,
        ),
        KnownScript::new(
            "Spore v2",
            "0x685a60219309029d01310311dba953d67029170ca4848a4ff638e57002130a0d",
            HashType::Data1,
        ),
    ],
    spore_cluster: &[
        KnownScript::new(
            "Spore Cluster v1",
            "0x7366a61534fa7c7e6225ecc0d828ea3b5366adec2b58206f2ee84995fe030075",
            HashType::Data1,
        ),
        KnownScript::new(
            "Spore Cluster v2",
            "0x0bbe768b519d8ea7b96d58f1182eb7e6ef96c541fbd9526975077ee09f049058",
            HashType::Data1,
        ),
    ],
    unique_items_collection: "0x0000000000000000000000000000000000000000000000000000000000000001",
};

/// Script tables of `network`.
pub fn scripts(network: Network) -> &'static ScriptTable {
    match network {
        Network::Mainnet => &MAINNET_SCRIPTS,
        Network::Testnet => &TESTNET_SCRIPTS,
    }
}
