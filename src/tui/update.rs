//! Pure state transitions: (App, Action) → (App, Command).
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! A terminated session ignores every action, so a second Quit is a no-op.

use super::state::{Action, App, Command, Phase};

/// Pure state transition function.
///
/// Given the current app and an action, produces the next app and the
/// command the effects boundary should carry out.
pub fn update(app: App, action: Action) -> (App, Command) {
    match app.phase {
        Phase::Running => update_running(app, action),
        Phase::Terminated => (app, Command::None),
    }
}

/// Running: arrows move the counter, Quit ends the session.
fn update_running(app: App, action: Action) -> (App, Command) {
    match action {
        Action::Increment => (
            App {
                counter: app.counter.saturating_add(1),
                ..app
            },
            Command::None,
        ),
        Action::Decrement => (
            App {
                counter: app.counter.saturating_sub(1),
                ..app
            },
            Command::None,
        ),
        Action::Quit => (
            App {
                phase: Phase::Terminated,
                ..app
            },
            Command::Terminate,
        ),
        Action::Other => (app, Command::None),
    }
}

/// Fold a sequence of actions over an app, stopping at the first Terminate.
///
/// Returns the final app and whether the session asked to terminate.
pub fn replay<I>(app: App, actions: I) -> (App, Command)
where
    I: IntoIterator<Item = Action>,
{
    let mut app = app;
    for action in actions {
        let (next, command) = update(app, action);
        app = next;
        if command == Command::Terminate {
            return (app, command);
        }
    }
    (app, Command::None)
}

// ============================================================================
// TESTS
// ============================================================================
