//! Log output
//!
//! The UI owns the terminal in raw mode, so events go to a file in the data
//! directory instead of stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "proauto-quote-tui.log";

const DEFAULT_FILTER: &str = "proauto_quote_tui=info";

/// `RUST_LOG` when set, otherwise info for this crate
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Subscriber appending plain-text events to `<log_dir>/proauto-quote-tui.log`.
///
/// Events are written on a background worker; keep the guard alive until
/// shutdown so they get flushed.
pub fn file_subscriber(
    log_dir: &Path,
    filter: EnvFilter,
) -> Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard)> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .context("Failed to open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer));

    Ok((subscriber, guard))
}

/// Install the global subscriber. Without a usable log directory logging is
/// off, since stderr belongs to the UI once raw mode starts.
pub fn init(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let log_dir = log_dir?;
    match file_subscriber(log_dir, env_filter()) {
        Ok((subscriber, guard)) => {
            subscriber.init();
            Some(guard)
        }
        Err(err) => {
            eprintln!("Logging disabled: {err:#}");
            None
        }
    }
}
