//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output setup:
//! - **JSONL to file** (`<data dir>/storybench/logs/storybench.jsonl`):
//!   structured, append-only
//! - **Pretty to stderr**: for developers
//!
//! `init` returns a guard that must be kept alive for the duration of the
//! program; dropping it flushes and closes the log file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("storybench").join("logs"))
}

/// Initialize the dual-output logging system. `log_dir` overrides the
/// default location; when no directory is available (or it cannot be
/// created) logging degrades to stderr only.
pub fn init(log_dir: Option<PathBuf>) -> LoggingGuard {
    let dir = log_dir.or_else(default_log_dir);

    let file = dir.and_then(|dir| {
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("[LOGGING] Failed to create log directory: {e}");
            return None;
        }
        let path = dir.join("storybench.jsonl");
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("[LOGGING] Failed to open log file {}: {e}", path.display());
                None
            }
        }
    });

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (json_layer, file_guard) = match file {
        Some(file) => {
            // Non-blocking writer so log flushing never stalls the event loop
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    // try_init: a second init (e.g. in tests) is a no-op, not a panic
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init();

    LoggingGuard {
        _file_guard: file_guard,
    }
}
