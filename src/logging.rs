//! File logging setup
//!
//! The terminal belongs to the TUI, so log output goes to a daily rolling
//! file (`~/.local/share/tripguide/logs/tripguide.log.<date>` on Linux)
//! through a non-blocking writer. The level comes from `RUST_LOG`, defaulting
//! to `tripguide=info`.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "tripguide=info";

const LOG_FILE_PREFIX: &str = "tripguide.log";

/// Platform directory for log files
pub fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tripguide").map(|dirs| dirs.data_dir().join("logs"))
}

/// Builds the level filter from `RUST_LOG`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `log_dir`.
///
/// The returned guard flushes buffered lines when dropped, so it must live
/// until the program exits.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_dir_is_under_tripguide() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("logs"));
            assert!(dir.to_string_lossy().contains("tripguide"));
        }
    }

    #[test]
    fn test_init_creates_log_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_dir = temp_dir.path().join("logs");
        let guard = init(&log_dir).expect("init should succeed");
        assert!(log_dir.is_dir());
        drop(guard);
    }
}
