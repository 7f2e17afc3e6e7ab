//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.button-kit/logs/button-kit.jsonl)
//! - **Compact to stderr** for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use button_kit::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(config.get_log_filter());
//!
//! tracing::info!(event_type = "app_start", "Application started");
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "button-kit.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// `default_filter` applies when RUST_LOG is unset. If the log file cannot
/// be opened, only the stderr layer is installed.
pub fn init(default_filter: &str) -> LoggingGuard {
    let log_path = log_path();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let Some(file) = open_log_file(&log_path) else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(pretty_layer)
            .init();
        tracing::warn!(log_path = %log_path.display(), "JSONL log unavailable, logging to stderr only");
        return LoggingGuard { _file_guard: None };
    };

    // Non-blocking writer so file IO never stalls the UI thread
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: Some(file_guard),
    }
}

fn open_log_file(path: &std::path::Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("[LOGGING] Failed to create log directory: {}", e);
            return None;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok()
}

/// Get the log directory path (~/.button-kit/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".button-kit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("button-kit-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_layout() {
        let path = log_path();
        assert!(path.ends_with(LOG_FILE_NAME));
        assert_eq!(path.parent(), Some(get_log_dir().as_path()));
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join(LOG_FILE_NAME);
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }
}
