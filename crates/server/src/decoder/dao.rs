// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{DataParseUnit, DecodeTag};

/// Nervos DAO cells. Deposits carry eight zero bytes; a withdrawing cell
/// stores the deposit block number there instead.
pub struct DaoDpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl DaoContent {
    pub fn is_withdraw(&self) -> bool {
        self.block_number.is_some()
    }
}

impl DataParseUnit for DaoDpu {
    const TAG: DecodeTag = DecodeTag::Dao;
    type Content = DaoContent;

    fn parse(data: &[u8]) -> DaoContent {
        let block_number = data
            .get(..8)
            .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
            .map(u64::from_le_bytes)
            .filter(|&n| n != 0);
        DaoContent { block_number }
    }
}
