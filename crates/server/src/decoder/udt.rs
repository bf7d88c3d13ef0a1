// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{DataParseUnit, DecodeTag};
use crate::types::serialize_u128_str;

const AMOUNT_SIZE: usize = 16;

/// sUDT / xUDT token cells. The amount is the first 16 bytes of data, as a
/// little-endian `u128`; xUDT extension data after it is ignored.
pub struct UdtDpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UdtContent {
    /// Raw amount in the token's base unit.
    #[serde(serialize_with = "serialize_u128_str")]
    pub amount: u128,
}

impl DataParseUnit for UdtDpu {
    const TAG: DecodeTag = DecodeTag::Udt;
    type Content = UdtContent;

    fn parse(data: &[u8]) -> UdtContent {
        // short data is zero-extended
        let mut buf = [0u8; AMOUNT_SIZE];
        let len = data.len().min(AMOUNT_SIZE);
        buf[..len].copy_from_slice(&data[..len]);
        UdtContent {
            amount: u128::from_le_bytes(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_round_trip_limits() {
        for amount in [0u128, 1, 100_000_000, u64::MAX as u128 + 1, u128::MAX] {
            assert_eq!(UdtDpu::parse(&amount.to_le_bytes()).amount, amount);
        }
    }

    #[test]
    fn test_trailing_extension_data_is_ignored() {
        let mut data = 42u128.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xff; 8]);
        assert_eq!(UdtDpu::parse(&data).amount, 42);
    }

    #[test]
    fn test_short_and_empty_data() {
        assert_eq!(UdtDpu::parse(&[]).amount, 0);
        assert_eq!(UdtDpu::parse(&[0x01, 0x01]).amount, 257);
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let content = UdtContent { amount: u128::MAX };
        assert_eq!(
            serde_json::to_value(content).unwrap(),
            serde_json::json!({ "amount": "340282366920938463463374607431768211455" })
        );
    }
}
