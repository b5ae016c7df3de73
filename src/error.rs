//! Error types for a terminal session.

use std::io;

use thiserror::Error;

/// Failures that end a session.
///
/// None of these are retried: the binary prints the message and exits
/// with status 1 once the terminal has been restored.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The terminal could not be put into raw / alternate-screen mode.
    #[error("could not acquire the terminal: {0}")]
    Acquire(#[source] io::Error),

    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),

    #[error("failed to read terminal input: {0}")]
    Input(#[source] io::Error),
}
