// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Personalization CKB applies to every blake2b hash.
pub const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";

/// Blake2b-256 with CKB's personalization, as used for script hashes, type
/// hashes and cell data hashes.
pub fn ckb_blake2b_256(data: &[u8]) -> [u8; 32] {
    let digest = blake2b_simd::Params::new()
        .hash_length(32)
        .personal(CKB_HASH_PERSONALIZATION)
        .hash(data);

    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hash() {
        // CKB's well-known blank hash.
        assert_eq!(
            hex::encode(ckb_blake2b_256(&[])),
            "44f4c69744d5f8c55d642062949dcae49bc4e7ef43d388c5a12f42b5633d163e"
        );
    }

    #[test]
    fn test_personalization_changes_digest() {
        let plain = blake2b_simd::Params::new().hash_length(32).hash(b"cell");
        assert_ne!(plain.as_bytes(), &ckb_blake2b_256(b"cell"));
    }
}
