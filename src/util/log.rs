// src/util/log.rs

//! File-backed tracing setup; stdout belongs to the terminal UI.
use std::fs::{File, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::Level;

pub const LOG_FILE_NAME: &str = "neurodoc.log";

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("DEBUG").unwrap_or_default() == "true"
    })
}

/// Install the global subscriber writing to `<log_dir>/neurodoc.log`.
///
/// The file is truncated on every start. `DEBUG=true` lowers the level to DEBUG.
pub fn init(log_dir: &Path) -> io::Result<PathBuf> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    let level = if debug_enabled() { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
