// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{DataParseUnit, DecodeTag};
use crate::consts::{TYPE_ID_ARGS_LEN, TYPE_ID_CODE_HASH};
use crate::types::{HashType, Script};

/// Type ID cells. Their data is opaque; the identity is the type script's
/// args.
pub struct TypeIdDpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TypeIdContent {}

impl DataParseUnit for TypeIdDpu {
    const TAG: DecodeTag = DecodeTag::TypeId;
    type Content = TypeIdContent;

    fn parse(_data: &[u8]) -> TypeIdContent {
        TypeIdContent {}
    }
}

/// Whether `script` is a Type ID script: the reserved code hash under hash
/// type `type`, committing to a 32-byte id in its args.
pub fn is_type_id(script: &Script) -> bool {
    script.hash_type == HashType::Type
        && script.args.len() == TYPE_ID_ARGS_LEN
        && script.code_hash.matches_hex(TYPE_ID_CODE_HASH)
}
