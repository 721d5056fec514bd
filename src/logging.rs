// Debug logging for menuboard
// File-based so log output never draws over the TUI; enabled with --debug

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

const LOG_FILE_NAME: &str = "menuboard-debug.log";

/// Default log location inside the system temp directory
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initialize debug logging to file
///
/// # Behavior
/// - If `enabled` is false: returns immediately, no file created, every
///   `tracing` macro stays a no-op
/// - If `enabled` is true: truncates `path` and installs a global subscriber
///   writing plain-text DEBUG and above to it
pub fn init(enabled: bool, path: &Path) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(io::Error::other)?;

    info!("menuboard debug log, to monitor: tail -f {}", path.display());
    Ok(())
}
