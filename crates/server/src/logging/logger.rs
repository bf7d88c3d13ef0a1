// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::LogConfig;

/// Name of the current log file inside `write_path`.
const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to install the global subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// The `http` pseudo level keeps everything at info and turns on the
/// request log, which is emitted at debug under the `http` target.
fn filter_directive(level: &str) -> &str {
    if level == "http" { "info,http=debug" } else { level }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter_directive(level)).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Size-rotated file writer: `logs.log` is current, `logs.log.1` and up are
/// rotated, and `write_max_files` counts both.
fn file_writer(config: &LogConfig) -> Result<NonBlocking, LoggingError> {
    std::fs::create_dir_all(&config.write_path)?;

    let appender = BasicRollingFileAppender::new(
        PathBuf::from(&config.write_path).join(LOG_FILE_NAME),
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        config.write_max_files.saturating_sub(1),
    )?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // The guard flushes on drop; logging lives as long as the process.
    std::mem::forget(guard);
    Ok(writer)
}

/// Install the global tracing subscriber described by `config`.
///
/// Console output is always on. With `config.write`, the same events also
/// go to a rotated file, never with ANSI colors.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = build_filter(&config.level)?;
    let file = if config.write {
        Some(file_writer(config)?)
    } else {
        None
    };
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        let file_layer = file.map(|writer| fmt::layer().json().with_writer(writer));
        registry
            .with(fmt::layer().json())
            .with(file_layer)
            .try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);
        let file_layer = file.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer)
        });
        registry.with(console_layer).with(file_layer).try_init()?;
    }

    Ok(())
}
