//! Spawn and difficulty model.
//!
//! [`Difficulty`] is the shared state of the two periodic controller ticks:
//! the difficulty tick raises `speed_mod`, the spawn tick reads it to decide
//! whether and how fast a runner drops. Using the slowdown powerup bumps
//! `slowdown_power` until its cooldown resets it.

use bevy_ecs::prelude::Resource;

use crate::components::runner::RunnerKind;

/// Velocity factor applied to viruses per slowdown level.
pub const SLOWDOWN_FACTOR: f32 = 0.65;
/// Lowest fall speed of a fresh runner, world units per second.
pub const BASE_FALL_SPEED: f32 = 300.0;
/// Spin range of a fresh runner, degrees per second either way.
pub const MAX_SPIN: f32 = 20.0;
/// Starting spawn gate. A roll above it spawns a runner.
pub const BASE_SPAWN_GATE: f32 = 0.80;
/// The gate never drops below this.
pub const MIN_SPAWN_GATE: f32 = 0.50;
pub const DEFAULT_SPEED_MOD_INCREMENT: f32 = 1.5;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Difficulty {
    pub speed_mod: f32,
    pub slowdown_power: u32,
}

impl Difficulty {
    /// Probability gate of the spawn roll.
    pub fn spawn_threshold(&self) -> f32 {
        (BASE_SPAWN_GATE - self.speed_mod / 1000.0).max(MIN_SPAWN_GATE)
    }

    /// Whether a uniform roll `r` in `[0, 1)` spawns a runner.
    pub fn should_spawn(&self, r: f32) -> bool {
        r > self.spawn_threshold()
    }

    /// Speed modifier for a runner of `kind`.
    ///
    /// Viruses spawned while a slowdown is active are slowed by
    /// `SLOWDOWN_FACTOR` once per level.
    pub fn effective_speed_mod(&self, kind: RunnerKind) -> f32 {
        if kind.is_hazard() && self.slowdown_power > 0 {
            self.speed_mod * SLOWDOWN_FACTOR.powi(self.slowdown_power as i32)
        } else {
            self.speed_mod
        }
    }

    pub fn ramp(&mut self, increment: f32) {
        self.speed_mod += increment;
    }
}
