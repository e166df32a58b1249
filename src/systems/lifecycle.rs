//! Run lifecycle: soap consumption and the loss check.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameStates, NextGameState, NextGameStates};
use crate::resources::playerstate::PlayerState;
use crate::resources::worldtime::WorldTime;

/// Drain one unit of soap per elapsed millisecond and request
/// [`GameStates::GameOver`] once the population or the soap runs out.
///
/// Runs only while playing.
pub fn lifecycle_system(
    time: Res<WorldTime>,
    mut player_state: ResMut<PlayerState>,
    mut next_state: ResMut<NextGameState>,
) {
    player_state.consume_fuel(time.delta_ms());
    if let Some(cause) = player_state.loss_cause()
        && next_state.get() == NextGameStates::Unchanged
    {
        info!("Game over ({:?}), score {}", cause, player_state.score);
        next_state.set(GameStates::GameOver);
    }
}
