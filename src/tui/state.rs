//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire state space of a counter session.
//! The transition function (`update`) and the rendering layer (`view`)
//! both program against them; the effects layer (`run`) only moves
//! values between them and the terminal.

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Lifecycle of a session.
///
/// `Terminated` is absorbing: once reached, no action changes the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Running,
    Terminated,
}

/// Top-level TUI model.
///
/// The counter is the only data the screen shows. The phase tells the
/// effects layer whether to keep reading input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct App {
    /// Current counter value. Starts at zero, not clamped.
    pub counter: i64,

    /// Whether the session is still accepting input.
    pub phase: Phase,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions. Keys with no meaning
/// map to `Other` so that every input event has exactly one Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add one to the counter.
    Increment,
    /// Subtract one from the counter.
    Decrement,
    /// End the session.
    Quit,
    /// Any key that is not bound. Ignored by `update`.
    Other,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// What the effects layer should do after a transition.
///
/// Pure code describes WHAT should happen; the event loop decides HOW.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Keep running; redraw if the state changed.
    #[default]
    None,
    /// Stop the event loop and release the terminal.
    Terminate,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Initial session state: counter at zero, running.
    pub fn new() -> Self {
        App {
            counter: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

// ============================================================================
// TESTS
// ============================================================================
