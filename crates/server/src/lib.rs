// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod consts;
pub mod decoder;
pub mod display;
pub mod explorer;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod resolve;
pub mod routes;
pub mod state;
pub mod types;
pub mod udt_registry;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;
