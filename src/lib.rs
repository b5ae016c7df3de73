//! mycli: an interactive terminal counter.

pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
