//! TUI color semantics and style configuration.
//!
//! The palette is an immutable `Theme` value handed to the rendering
//! layer, not ambient state, so rendering can be tested with any theme.
//!
//! Color semantics:
//! - Cyan: frame and title
//! - Yellow + bold: the counter value
//! - Dim: help text

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

// ============================================================================
// DEFAULT STYLES
// ============================================================================

/// Title embedded in the top border, bold cyan.
pub const STYLE_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border lines, cyan.
pub const STYLE_BORDER: Style = Style::new().fg(Color::Cyan);

/// Highlighted counter value, bold yellow.
pub const STYLE_COUNTER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// "Counter:" label, terminal default.
pub const STYLE_LABEL: Style = Style::new();

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// THEME
// ============================================================================

/// Complete set of styles used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub border_type: BorderType,
    pub label: Style,
    pub counter: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: STYLE_TITLE,
            border: STYLE_BORDER,
            border_type: BorderType::Rounded,
            label: STYLE_LABEL,
            counter: STYLE_COUNTER,
            help: STYLE_HELP,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
