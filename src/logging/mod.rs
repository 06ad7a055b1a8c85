//! File logging setup.
//!
//! The TUI owns stdout, so log lines go to a file instead. Logging is off
//! unless `TRIVIA_LOG` holds a filter directive such as `debug` or
//! `trivia_tui=trace`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "TRIVIA_LOG";

/// Log file name, created in the system temp directory.
pub const LOG_FILE_NAME: &str = "trivia-tui.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Parse a filter directive, falling back to `info` if it does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber if `TRIVIA_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init_logging() -> io::Result<Option<PathBuf>> {
    let directive = match std::env::var(LOG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };

    let path = log_file_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging to {}", path.display());
        Ok(Some(path))
    } else {
        Ok(None)
    }
}
