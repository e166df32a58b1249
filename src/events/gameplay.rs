//! Gameplay events exchanged between the rule observers.
//!
//! Collision rules and powerup input do not touch the player, the camera or
//! the runners directly. They trigger one of these events and the observer
//! owning that part of the world reacts.

use bevy_ecs::prelude::*;

/// A virus got through: shake the camera and flash the screen red.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlashEvent {}

/// The player caught an oil drop.
#[derive(Event, Debug, Clone, Copy)]
pub struct FreezePlayerEvent {}

/// A liquid soap charge was spent.
#[derive(Event, Debug, Clone, Copy)]
pub struct SlowdownEnemiesEvent {}

/// An antivirus charge was spent.
#[derive(Event, Debug, Clone, Copy)]
pub struct NukeEnemiesEvent {}
