//! Input action events.
//!
//! This module defines [`InputEvent`], one key-down or key-up of a logical
//! [`InputAction`]. The raylib poller pushes them into the
//! [`InputQueue`](crate::resources::input::InputQueue); gameplay drains the
//! queue once per frame.

/// Enumeration of logical input actions.
///
/// These abstract the physical keys into gameplay-meaningful actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move one lane left (default: A, Left arrow).
    MoveLeft,
    /// Move one lane right (default: D, Right arrow).
    MoveRight,
    /// Spend a liquid soap charge (default: 1).
    UseSlowdown,
    /// Spend an antivirus charge (default: 2).
    UseNuke,
    /// Start a new run after game over (default: Enter).
    Restart,
    /// Leave the game (default: Escape).
    Quit,
}

/// One press or release of an input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn released(action: InputAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}
