//! Tracing subscriber setup
//!
//! The terminal UI owns stdout, so log output goes to a file under the
//! local data directory. Filtering follows `DERELICT_LOG` (same syntax as
//! `RUST_LOG`) and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DERELICT_LOG";

/// Default log file: `<data_local_dir>/derelict/derelict.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("derelict").join("derelict.log"))
}

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Returns `false` when the file cannot be created or a subscriber is
/// already installed; the game runs without logs in that case.
pub fn init_global(log_file_path: &Path) -> bool {
    if let Some(parent) = log_file_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };
    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber with file logging and env-based filtering.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
