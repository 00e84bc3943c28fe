//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a file under the user's
//! local data directory. Non-interactive commands log to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Returns the default log file path, creating its directory.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or created.
pub fn default_log_path() -> Result<PathBuf> {
    let mut path =
        dirs::data_local_dir().ok_or_else(|| eyre!("Could not determine local data directory"))?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    path.push(format!("{APP_NAME}.log"));
    Ok(path)
}

/// Choose the log target for the TUI.
///
/// Stderr would draw over the TUI, so when no log file is available the run
/// goes unlogged and a note is printed before the screen is taken over.
#[must_use]
pub fn tui_target(log_path: Result<PathBuf>) -> Option<LogTarget> {
    match log_path {
        Ok(path) => Some(LogTarget::File(path)),
        Err(err) => {
            eprintln!("{APP_NAME}: logging disabled: {err}");
            None
        }
    }
}

/// Build the filter from `RUST_LOG`, defaulting to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file: File = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
                .map_err(|e| eyre!("Failed to install log subscriber: {e}"))
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .map_err(|e| eyre!("Failed to install log subscriber: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_target_uses_log_file() {
        let path = PathBuf::from("/tmp/finboard/finboard.log");
        assert_eq!(tui_target(Ok(path.clone())), Some(LogTarget::File(path)));
    }

    #[test]
    fn test_tui_target_without_log_file_is_unlogged() {
        assert_eq!(tui_target(Err(eyre!("no data directory"))), None);
    }
}
