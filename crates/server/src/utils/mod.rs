// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod concurrency;
pub mod format;
pub mod hash;
pub mod molecule;

pub use concurrency::run_with_concurrency_ordered;
pub use format::{format_decimal, hex_with_prefix, shannons_to_ckb};
pub use hash::ckb_blake2b_256;
