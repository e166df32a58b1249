//! Keyboard bindings and the per-frame input queue.
//!
//! [`InputState`] maps physical keys to [`InputAction`]s. [`InputQueue`] is
//! the ordered list of key-down/key-up events of the current frame; the
//! raylib poller fills it and
//! [`apply_player_input`](crate::systems::player::apply_player_input) drains it.
use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;
use smallvec::{SmallVec, smallvec};

use crate::events::input::{InputAction, InputEvent};

/// Keys bound to one action.
#[derive(Debug, Clone)]
pub struct ActionBinding {
    pub action: InputAction,
    pub keys: SmallVec<[KeyboardKey; 2]>,
}

impl ActionBinding {
    fn new(action: InputAction, keys: SmallVec<[KeyboardKey; 2]>) -> Self {
        Self { action, keys }
    }
}

/// Resource holding the key bindings relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub bindings: Vec<ActionBinding>,
    /// Toggles the debug overlay.
    pub debug_toggle: KeyboardKey,
}

impl Default for InputState {
    fn default() -> Self {
        use InputAction::*;
        Self {
            bindings: vec![
                ActionBinding::new(
                    MoveLeft,
                    smallvec![KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT],
                ),
                ActionBinding::new(
                    MoveRight,
                    smallvec![KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT],
                ),
                ActionBinding::new(UseSlowdown, smallvec![KeyboardKey::KEY_ONE]),
                ActionBinding::new(UseNuke, smallvec![KeyboardKey::KEY_TWO]),
                ActionBinding::new(Restart, smallvec![KeyboardKey::KEY_ENTER]),
                ActionBinding::new(Quit, smallvec![KeyboardKey::KEY_ESCAPE]),
            ],
            debug_toggle: KeyboardKey::KEY_F11,
        }
    }
}

impl InputState {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyboardKey) -> Option<InputAction> {
        self.bindings
            .iter()
            .find(|b| b.keys.contains(&key))
            .map(|b| b.action)
    }
}

/// Input events of the current frame, oldest first.
#[derive(Resource, Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Take every queued event, leaving the queue empty.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let input = InputState::default();
        assert_eq!(input.action_for(KeyboardKey::KEY_A), Some(InputAction::MoveLeft));
        assert_eq!(input.action_for(KeyboardKey::KEY_LEFT), Some(InputAction::MoveLeft));
        assert_eq!(input.action_for(KeyboardKey::KEY_RIGHT), Some(InputAction::MoveRight));
        assert_eq!(input.action_for(KeyboardKey::KEY_ONE), Some(InputAction::UseSlowdown));
        assert_eq!(input.action_for(KeyboardKey::KEY_TWO), Some(InputAction::UseNuke));
        assert_eq!(input.action_for(KeyboardKey::KEY_Z), None);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::pressed(InputAction::MoveLeft));
        queue.push(InputEvent::released(InputAction::MoveLeft));
        queue.push(InputEvent::pressed(InputAction::UseNuke));
        let drained: Vec<InputEvent> = queue.drain().collect();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0], InputEvent::pressed(InputAction::MoveLeft));
        assert!(!drained[1].pressed);
        assert_eq!(drained[2].action, InputAction::UseNuke);
        assert!(queue.is_empty());
    }
}
