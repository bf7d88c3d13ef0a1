// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Formatting utilities for hex encoding and fixed-point amounts.

use crate::consts::{CKB_DECIMALS, MAX_DECIMAL_PLACES};

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Shift `amount` right by `decimals` decimal places without going through
/// floating point. Trailing fractional zeros are trimmed.
///
/// `format_decimal(123_450, 3)` is `"123.45"`, `format_decimal(5, 3)` is
/// `"0.005"`. `decimals` is capped at [`MAX_DECIMAL_PLACES`].
pub fn format_decimal(amount: u128, decimals: u32) -> String {
    let digits = amount.to_string();
    let decimals = decimals.min(MAX_DECIMAL_PLACES) as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Shannons to CKB (8 decimal places).
pub fn shannons_to_ckb(shannons: u64) -> String {
    format_decimal(shannons as u128, CKB_DECIMALS)
}
