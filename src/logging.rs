//! Opt-in diagnostic logging.
//!
//! The session owns the terminal, so logs never go to stdout or stderr.
//! With no log file configured, no subscriber is installed and every
//! `tracing` macro is a no-op.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, DEFAULT_LOG_LEVEL};

/// Install a file-backed subscriber if the config asks for one.
///
/// A log file that cannot be opened, or a subscriber that cannot be
/// installed, is reported on stderr and the session continues without
/// logging.
pub fn init_tracing(config: &LogConfig) {
    let Some(path) = config.file.as_deref() else {
        return;
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    if let Err(e) = install(file, &config.level) {
        eprintln!("Warning: logging disabled, {}: {}", path.display(), e);
    }
}

/// Set the global subscriber: `level` filter, plain-text lines into `file`.
///
/// Fails if a global subscriber is already set.
fn install(file: File, level: &str) -> Result<(), TryInitError> {
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(file_layer)
        .try_init()
}

/// Parse a filter directive, falling back to the default level.
///
/// A directive without `=` must be a level name; `EnvFilter` would
/// otherwise read a bare word as a target and enable `word=trace`.
pub fn build_filter(level: &str) -> EnvFilter {
    let bare_levels_valid = level
        .split(',')
        .filter(|directive| !directive.contains('='))
        .all(|directive| directive.trim().parse::<LevelFilter>().is_ok());

    if !bare_levels_valid {
        return EnvFilter::new(DEFAULT_LOG_LEVEL);
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Open the log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
