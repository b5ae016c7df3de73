//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop blocks on the next terminal event, applies
//! the pure transition and redraws when the state changed. The loop is
//! written against `EventSource` and a draw callback so it can be driven
//! without a TTY.

use std::io;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::SessionError;

use super::state::{Action, App, Command};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Every key maps to something; unbound keys and key releases are `Other`.
pub fn map_key(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Other;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Chords are unbound; Shift alone is not a chord.
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return Action::Other;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Increment,
        KeyCode::Down | KeyCode::Char('j') => Action::Decrement,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Other,
    }
}

// ============================================================================
// EVENT SOURCE
// ============================================================================

/// Blocking supplier of terminal events.
pub trait EventSource {
    /// Wait for the next event.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Restores the terminal when dropped.
///
/// Created as soon as raw mode is on, so every exit path after that point
/// (early `?`, normal return, unwinding panic) leaves the alternate screen.
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<io::Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard { _private: () };
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok((terminal, guard))
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the session against the real terminal until the user quits.
///
/// Returns the final app state. Any terminal failure is returned after
/// the terminal has been restored.
pub fn run(config: &Config) -> Result<App, SessionError> {
    install_panic_hook();
    let (mut terminal, _guard) = setup_terminal().map_err(SessionError::Acquire)?;
    info!("session started");

    let theme = config.theme;
    let app = drive(App::new(), &mut CrosstermEvents, |app| {
        terminal
            .draw(|frame| render(app, &theme, frame))
            .map(|_| ())
            .map_err(SessionError::Draw)
    })?;

    info!(counter = app.counter, "session terminated");
    Ok(app)
}

/// Core loop: draw, wait for input, transition, repeat.
///
/// Draws the initial frame, then redraws only when the state changes or
/// the terminal is resized. Returns as soon as a transition asks to
/// terminate; no further events are read after that.
pub fn drive<S, D>(app: App, events: &mut S, mut draw: D) -> Result<App, SessionError>
where
    S: EventSource,
    D: FnMut(&App) -> Result<(), SessionError>,
{
    let mut app = app;
    draw(&app)?;

    while app.is_running() {
        let action = match events.next_event().map_err(SessionError::Input)? {
            Event::Key(key) => map_key(key),
            Event::Resize(..) => {
                draw(&app)?;
                continue;
            }
            _ => continue, // ignore mouse, focus, paste
        };

        let (next, command) = update(app, action);
        let changed = next != app;
        app = next;
        debug!(?action, counter = app.counter, "applied action");

        match command {
            Command::Terminate => break,
            Command::None if changed => draw(&app)?,
            Command::None => {}
        }
    }

    Ok(app)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crossterm::event::KeyEventState;

    /// Replays a fixed list of events, then fails like a closed input.
    struct Scripted {
        events: VecDeque<Event>,
        reads: usize,
    }

    impl Scripted {
        fn keys(codes: &[KeyCode]) -> Self {
            Scripted {
                events: codes.iter().map(|&c| press(c)).collect(),
                reads: 0,
            }
        }

        fn from_events(events: Vec<Event>) -> Self {
            Scripted {
                events: events.into(),
                reads: 0,
            }
        }
    }

    impl EventSource for Scripted {
        fn next_event(&mut self) -> io::Result<Event> {
            self.reads += 1;
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Drive a script and collect every counter value that was drawn.
    fn drive_script(script: &mut Scripted) -> (Result<App, SessionError>, Vec<i64>) {
        let mut frames = Vec::new();
        let result = drive(App::new(), script, |app| {
            frames.push(app.counter);
            Ok(())
        });
        (result, frames)
    }

    // -- Key mapping --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::Quit);
    }

    #[test]
    fn plain_c_is_ignored() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Action::Other);
    }

    #[test]
    fn q_and_esc_map_to_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(q), Action::Quit);
        assert_eq!(map_key(esc), Action::Quit);
    }

    #[test]
    fn vim_keys_map_to_counter_actions() {
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key(j), Action::Decrement);
        assert_eq!(map_key(k), Action::Increment);
    }

    #[test]
    fn arrow_keys_map_to_counter_actions() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(up), Action::Increment);
        assert_eq!(map_key(down), Action::Decrement);
    }

    #[test]
    fn unmapped_key_is_other() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Action::Other);
    }

    #[test]
    fn key_release_is_other() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(key), Action::Other);
    }

    #[test]
    fn key_repeat_still_counts() {
        let key = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(map_key(key), Action::Increment);
    }

    #[test]
    fn modified_chords_are_other() {
        let chords = [
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::ALT),
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::ALT),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::ALT),
        ];
        for key in chords {
            assert_eq!(map_key(key), Action::Other, "{:?} should be unbound", key);
        }
    }

    #[test]
    fn shift_does_not_block_arrows() {
        let key = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(map_key(key), Action::Decrement);
    }

    // -- Event loop --

    #[test]
    fn quit_first_terminates_immediately() {
        let mut script = Scripted::keys(&[KeyCode::Char('q')]);
        let (result, frames) = drive_script(&mut script);

        let app = result.expect("quit should end the loop cleanly");
        assert!(!app.is_running());
        assert_eq!(app.counter, 0);
        assert_eq!(frames, vec![0], "only the initial frame is drawn");
        assert_eq!(script.reads, 1, "no events read after quit");
    }

    #[test]
    fn up_up_down_then_quit_ends_at_one() {
        let mut script = Scripted::keys(&[
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Char('q'),
        ]);
        let (result, frames) = drive_script(&mut script);

        assert_eq!(result.expect("clean exit").counter, 1);
        assert_eq!(frames, vec![0, 1, 2, 1]);
    }

    #[test]
    fn unmapped_keys_do_not_redraw() {
        let mut script = Scripted::keys(&[
            KeyCode::Char('x'),
            KeyCode::Char('k'),
            KeyCode::Char('x'),
            KeyCode::Esc,
        ]);
        let (result, frames) = drive_script(&mut script);

        assert_eq!(result.expect("clean exit").counter, 1);
        assert_eq!(frames, vec![0, 1]);
    }

    #[test]
    fn events_after_quit_are_never_read() {
        let mut script = Scripted::keys(&[KeyCode::Char('j'), KeyCode::Esc, KeyCode::Up, KeyCode::Up]);
        let (result, _) = drive_script(&mut script);

        assert_eq!(result.expect("clean exit").counter, -1);
        assert_eq!(script.reads, 2);
        assert_eq!(script.events.len(), 2);
    }

    #[test]
    fn resize_redraws_unchanged_state() {
        let mut script = Scripted::from_events(vec![
            press(KeyCode::Up),
            Event::Resize(100, 30),
            Event::FocusGained,
            press(KeyCode::Char('q')),
        ]);
        let (result, frames) = drive_script(&mut script);

        assert_eq!(result.expect("clean exit").counter, 1);
        assert_eq!(frames, vec![0, 1, 1]);
    }

    #[test]
    fn input_failure_is_reported() {
        let mut script = Scripted::keys(&[KeyCode::Up]);
        let (result, frames) = drive_script(&mut script);

        assert!(matches!(result, Err(SessionError::Input(_))));
        assert_eq!(frames, vec![0, 1]);
    }

    #[test]
    fn draw_failure_stops_the_loop() {
        let mut script = Scripted::keys(&[KeyCode::Up, KeyCode::Char('q')]);
        let result = drive(App::new(), &mut script, |app| {
            if app.counter == 0 {
                Ok(())
            } else {
                Err(SessionError::Draw(io::Error::other("broken pipe")))
            }
        });

        assert!(matches!(result, Err(SessionError::Draw(_))));
        assert_eq!(script.reads, 1);
    }

    #[test]
    fn loop_renders_through_test_backend() {
        use crate::tui::theme::Theme;
        use ratatui::backend::TestBackend;

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        let theme = Theme::default();
        let mut script = Scripted::keys(&[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Char('q')]);

        drive(App::new(), &mut script, |app| {
            terminal.draw(|frame| render(app, &theme, frame)).unwrap();
            Ok(())
        })
        .expect("clean exit");

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(content.contains("Counter: 3"));
    }
}
