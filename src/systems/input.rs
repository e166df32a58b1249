//! Keyboard polling.
//!
//! [`poll_input`] reads raylib once per frame and turns key presses and
//! releases of the bound keys into [`InputEvent`]s on the
//! [`InputQueue`]. The debug toggle key triggers a
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! directly.
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputQueue, InputState};

/// Poll Raylib for keyboard input and queue the resulting events.
pub fn poll_input(
    input: Res<InputState>,
    mut queue: ResMut<InputQueue>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for binding in input.bindings.iter() {
        if binding.keys.iter().any(|&key| rl.is_key_pressed(key)) {
            queue.push(InputEvent::pressed(binding.action));
        }
        if binding.keys.iter().any(|&key| rl.is_key_released(key)) {
            queue.push(InputEvent::released(binding.action));
        }
    }
    if rl.is_key_pressed(input.debug_toggle) {
        commands.trigger(SwitchDebugEvent {});
    }
}
