#![forbid(unsafe_code)]

//! Logging setup.
//!
//! The UI owns stdout and raw mode makes stderr unreadable, so logs go
//! to a file or nowhere. Filtering uses the standard env-filter syntax
//! through the `SLIDEDECK_LOG` variable (default `info`).

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SLIDEDECK_LOG";

/// Install the global subscriber writing to `log_file`, if given.
///
/// With no file, no subscriber is installed and log events are dropped.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}
