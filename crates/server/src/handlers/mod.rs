// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod cells;
pub mod health;
pub mod metrics;
pub mod transactions;
pub mod udts;
pub mod version;
