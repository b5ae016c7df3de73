//! TUI module for the interactive counter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Command)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Style configuration consumed by `view`
//! - `run`: Effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
