// Debug logging for Pong
// The TUI owns the terminal, so log records go to a file instead of stderr

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

const LOG_FILE_NAME: &str = "pong-debug.log";

/// Where the debug log is written
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Truncate the log file and route `tracing` records at DEBUG and above into it.
///
/// Returns the log file's path. Fails if the file cannot be created or a
/// global subscriber is already installed.
pub fn init() -> io::Result<PathBuf> {
    let path = log_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
