//! Pure rendering: map App state to a ratatui widget tree.
//!
//! `view()` builds the widget from state and theme alone; `render()`
//! places it on the frame. The only effect is Frame::render_widget(),
//! which writes to the terminal buffer.

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::state::App;
use super::theme::Theme;

/// Text embedded in the top border.
pub const TITLE: &str = " mycli - Ratatui TUI ";

/// Static keybinding hint shown under the counter.
pub const HELP: &str = "Press ↑/↓ to change, q to quit";

const COUNTER_LABEL: &str = "Counter: ";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the session to the terminal frame, filling the whole area.
pub fn render(app: &App, theme: &Theme, frame: &mut Frame) {
    frame.render_widget(view(app, theme), frame.area());
}

/// Build the widget for one frame.
///
/// Layout inside the border: blank, counter, blank, help.
pub fn view(app: &App, theme: &Theme) -> Paragraph<'static> {
    let block = Block::bordered()
        .border_type(theme.border_type)
        .border_style(theme.border)
        .title(Span::styled(TITLE, theme.title));

    let text = vec![
        Line::from(""),
        counter_line(app.counter, theme),
        Line::from(""),
        Line::from(Span::styled(HELP, theme.help)),
    ];

    Paragraph::new(text).block(block).alignment(Alignment::Center)
}

fn counter_line(counter: i64, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(COUNTER_LABEL, theme.label),
        Span::styled(counter.to_string(), theme.counter),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
