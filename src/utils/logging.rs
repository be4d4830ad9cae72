//! `tracing` subscriber setup.
//!
//! The terminal front-end owns stdout/stderr while the alternate screen is up,
//! so interactive runs log to a file under the data directory. Headless runs
//! log to stderr and default to `warn` so per-run session events stay quiet.
//! Both honor `RUST_LOG`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append log lines to `path`.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Log to stderr (headless subcommands).
pub fn init_stderr_logging() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
