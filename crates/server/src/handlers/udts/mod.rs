// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_udt;

pub use get_udt::{GetUdtError, UdtResponse, get_udt};
