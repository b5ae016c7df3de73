//! Session configuration.
//!
//! Built once by the binary from the command line and passed by
//! reference into the session. Nothing here is read from the environment.

use std::path::PathBuf;

use crate::tui::theme::Theme;

/// Default `tracing` filter directive when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Everything a session needs besides the terminal itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Styles used for every frame.
    pub theme: Theme,
    /// Diagnostic logging. Off unless a file is given.
    pub log: LogConfig,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file path. `None` disables logging entirely, since the
    /// alternate screen owns stdout and stderr while the session runs.
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `debug` or `mycli=trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn new(log_file: Option<PathBuf>, log_level: impl Into<String>) -> Self {
        Config {
            theme: Theme::default(),
            log: LogConfig {
                file: log_file,
                level: log_level.into(),
            },
        }
    }
}
