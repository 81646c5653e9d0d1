//! Log file setup
//!
//! The alternate screen owns the terminal, so events go to a file in the
//! platform data directory.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "production-entry-tui.log";

/// Open the log file writer in `log_dir`.
///
/// Events are written by a background worker. Anything still buffered
/// reaches the file when the returned guard is dropped, so the guard must
/// live until the last event has been emitted.
pub fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init(config: &TuiConfig, writer: NonBlocking) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter_or_default().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("nested");

        let (_writer, _guard) = file_writer(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_buffered_events_reach_file_when_guard_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let (writer, guard) = file_writer(dir.path()).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("Exiting on error: terminal lost");
        });
        drop(guard);

        let contents = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("Exiting on error: terminal lost"));
        assert!(contents.contains("ERROR"));
    }
}
