//! Tracing configuration for the accessory bridge
//!
//! ## Behavior / 行为
//!
//! - **Filter**: `RUST_LOG` wins, then `logging.filter`, then a debug/info
//!   default depending on the build
//! - **Stdout**: always on, log-style lines with UTC timestamps
//! - **File**: daily-rolling file under `logging.directory` when it is set

use std::{fs, io, path::Path, sync::OnceLock};

use ka_core::config::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

const LOG_FILE_PREFIX: &str = "keyboard-accessory.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when neither `RUST_LOG` nor config sets one.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ka_app={level}"),
        format!("ka_infra={level}"),
        // Metric samples are only interesting when asked for.
        "metrics=warn".to_string(),
    ]
}

fn build_env_filter(logging: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    match logging.filter.as_deref() {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => Ok(EnvFilter::new(
            build_filter_directives(is_development()).join(","),
        )),
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the bridge is started.
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - A global subscriber is already registered
/// - `logging.filter` holds invalid directives
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(logging)?;

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match logging.directory.as_deref().map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
        None => None,
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
