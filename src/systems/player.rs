//! Player input and player-side effects.
//!
//! [`apply_player_input`] drains the [`InputQueue`] every frame. Only
//! key-down events act. Lane moves and powerups act only while playing;
//! restart acts only after game over; quit acts always.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Color;

use crate::components::mapposition::MapPosition;
use crate::components::player::{LaneMovement, Player};
use crate::components::tween::{Easing, LoopMode, TweenCallback, TweenPosition, TweenTint};
use crate::events::gameplay::{FreezePlayerEvent, NukeEnemiesEvent, SlowdownEnemiesEvent};
use crate::events::input::{InputAction, InputEvent};
use crate::lanes::hero_slots;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputQueue;
use crate::resources::playerstate::PlayerState;

/// Seconds a lane change takes.
pub const LANE_MOVE_DURATION: f32 = 0.15;
/// Seconds of each half of the oil freeze tint pulse.
pub const FREEZE_PULSE: f32 = 0.2;
pub const FREEZE_TINT: Color = Color::new(128, 128, 128, 255);

pub fn apply_player_input(
    mut commands: Commands,
    mut queue: ResMut<InputQueue>,
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut player_state: ResMut<PlayerState>,
    mut players: Query<(Entity, &mut LaneMovement, &MapPosition), With<Player>>,
) {
    let events: Vec<InputEvent> = queue.drain().collect();
    let state = game_state.get();

    for event in events {
        if !event.pressed {
            continue;
        }
        match (event.action, state) {
            (InputAction::Quit, _) => {
                info!("Quit requested");
                next_state.set(GameStates::Quitting);
            }
            (InputAction::Restart, GameStates::GameOver) => {
                info!("Restart requested");
                next_state.set(GameStates::Playing);
            }
            (InputAction::MoveLeft, GameStates::Playing) => {
                move_player(&mut commands, &mut players, -1);
            }
            (InputAction::MoveRight, GameStates::Playing) => {
                move_player(&mut commands, &mut players, 1);
            }
            (InputAction::UseSlowdown, GameStates::Playing) => {
                if player_state.slowdown_charges > 0 {
                    player_state.slowdown_charges.decrease(1);
                    commands.trigger(SlowdownEnemiesEvent {});
                }
            }
            (InputAction::UseNuke, GameStates::Playing) => {
                if player_state.nuke_charges > 0 {
                    player_state.nuke_charges.decrease(1);
                    commands.trigger(NukeEnemiesEvent {});
                }
            }
            (action, state) => debug!("Ignoring {:?} in {:?}", action, state),
        }
    }
}

fn move_player(
    commands: &mut Commands,
    players: &mut Query<(Entity, &mut LaneMovement, &MapPosition), With<Player>>,
    direction: i32,
) {
    for (entity, mut movement, position) in players.iter_mut() {
        let Some(lane) = movement.begin_move(direction) else {
            continue;
        };
        let target = hero_slots()[lane];
        commands.entity(entity).try_insert(
            TweenPosition::new(position.pos, target, LANE_MOVE_DURATION)
                .with_easing(Easing::QuadOut)
                .with_on_finish(TweenCallback::EndLaneMove),
        );
    }
}

/// Freeze the soap and pulse it grey. An oil drop caught while already
/// frozen changes nothing.
pub fn freeze_player_observer(
    _trigger: On<FreezePlayerEvent>,
    mut commands: Commands,
    mut players: Query<(Entity, &mut LaneMovement), With<Player>>,
) {
    for (entity, mut movement) in players.iter_mut() {
        if !movement.freeze() {
            continue;
        }
        debug!("Player frozen");
        commands.entity(entity).try_insert(
            TweenTint::new(Color::WHITE, FREEZE_TINT, FREEZE_PULSE)
                .with_loop_mode(LoopMode::Yoyo)
                .with_on_finish(TweenCallback::EndFreeze),
        );
    }
}
