// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, try_create_layers};
use crate::ok;
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Global subscriber for the whole process. Logging is **DISABLED** unless this (or
/// [`try_initialize_logging_thread_local()`]) is called with a level other than
/// [`LevelFilter::OFF`]; until then the [`tracing::info!`], [`tracing::debug!`], etc.
/// macros in the line editor cost next to nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(config: TracingConfig) -> miette::Result<()> {
    // Early return if the level filter is off.
    if config.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    let layers = try_create_layers(config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, great for tests. Logging stops when the returned guard is
/// dropped. Returns `None` if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    if config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    let layers = try_create_layers(config)?;
    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WriterConfig, core::test_fixtures::try_create_temp_dir};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_thread_local_logging_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path_str),
            level_filter: LevelFilter::DEBUG,
        })
        .unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "session started", start_col = 3);
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("session started"));
        assert!(contents.contains("start_col=3"));
    }

    #[test]
    #[serial]
    fn test_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        })
        .unwrap();
        assert!(guard.is_none());
    }
}
