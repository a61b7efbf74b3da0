//! Logging initialization and configuration.
//!
//! Logs go to a file, never to the terminal, so they cannot garble the TUI
//! or the report printed on stdout in one-shot mode.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Also log each evaluation's tier and match count
//! - `RUST_LOG=info` - Startup and user actions (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//!
//! The directory defaults to `logs/` next to the executable and can be
//! overridden with `--log-dir`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `logs/` beside the executable, or `./logs` if the executable path is unknown.
pub fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// One file per run, e.g. `phishcheck.2024-12-06-14-30-25.log`.
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("phishcheck.{}.log", started.format("%Y-%m-%d-%H-%M-%S"))
}

/// Initialize the logging system.
///
/// Returns the path of the log file, or `None` if logging could not be set up.
/// Failing to log is never fatal: a warning goes to stderr and the program
/// continues without a subscriber.
pub fn init_logging(log_dir: Option<&Path>) -> Option<PathBuf> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory {}: {}", log_dir.display(), e);
        return None;
    }

    let log_path = log_dir.join(log_file_name(Local::now()));
    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_path.display(), e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
        return None;
    }

    // Keep the non-blocking writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Logging initialized - writing to {}", log_path.display());
    Some(log_path)
}
