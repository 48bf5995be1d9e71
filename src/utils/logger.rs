//! File logger for `--debug` runs
//!
//! Stdout is the menu itself, so diagnostics go to `.menu-cli/logs/latest.log`
//! through a `tracing-subscriber` fmt layer. Without `--debug` no subscriber
//! is installed and the `tracing` macros in the crate cost nothing.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

/// Default log location, relative to the working directory
pub fn default_log_path() -> PathBuf {
    PathBuf::from(".menu-cli").join("logs").join("latest.log")
}

/// Open (creating parents) the log file in append mode
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global file subscriber. Fails if one is already set.
pub fn init_file_logger(path: &Path) -> anyhow::Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Logger already initialized: {}", e))?;

    tracing::info!(path = %path.display(), "file logger initialized");
    Ok(())
}
