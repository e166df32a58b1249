//! State of one playthrough.
//!
//! [`PlayerState`] bundles the four bounded counters and the score. It is
//! replaced wholesale when a new run starts, so nothing carries over between
//! runs.
//!
//! # Related
//!
//! - [`crate::boundedcounter::BoundedCounter`] – the clamped counters
//! - [`crate::systems::lifecycle`] – drains fuel and detects the loss conditions

use bevy_ecs::prelude::Resource;

use crate::boundedcounter::BoundedCounter;
use crate::resources::gameconfig::GameConfig;

pub const DEFAULT_FUEL_MAX: i32 = 50000;
pub const DEFAULT_POPULATION: i32 = 300;
pub const POPULATION_MAX: i32 = 10000;
pub const MAX_CHARGES: i32 = 3;
/// Score awarded for intercepting a virus.
pub const HAZARD_SCORE: i32 = 10;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    PopulationWiped,
    OutOfSoap,
}

#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    /// Soap meter, in milliseconds of play left.
    pub fuel: BoundedCounter,
    /// Liquid soap charges.
    pub slowdown_charges: BoundedCounter,
    /// Antivirus charges.
    pub nuke_charges: BoundedCounter,
    /// People still healthy.
    pub population: BoundedCounter,
    pub score: i32,
    /// Sub-millisecond remainder of the fuel drain.
    drain_carry_ms: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::with_limits(DEFAULT_FUEL_MAX, DEFAULT_POPULATION)
    }
}

impl PlayerState {
    /// Fresh state with a full soap meter of `fuel_max` and `population` people.
    pub fn with_limits(fuel_max: i32, population: i32) -> Self {
        Self {
            fuel: BoundedCounter::new(fuel_max, 0, fuel_max),
            slowdown_charges: BoundedCounter::new(0, 0, MAX_CHARGES),
            nuke_charges: BoundedCounter::new(0, 0, MAX_CHARGES),
            population: BoundedCounter::new(population, 0, POPULATION_MAX),
            score: 0,
            drain_carry_ms: 0.0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_limits(config.fuel_max, config.population_initial)
    }

    /// Burn one unit of fuel per elapsed millisecond.
    ///
    /// Fractions of a millisecond accumulate across frames so the meter
    /// empties after exactly `fuel.max()` milliseconds of play.
    pub fn consume_fuel(&mut self, elapsed_ms: f32) {
        if elapsed_ms <= 0.0 {
            return;
        }
        self.drain_carry_ms += elapsed_ms;
        let whole = self.drain_carry_ms.floor();
        self.drain_carry_ms -= whole;
        self.fuel.decrease(whole as i32);
    }

    /// The loss condition currently met, if any. Population is checked first.
    pub fn loss_cause(&self) -> Option<LossCause> {
        if self.population == 0 {
            Some(LossCause::PopulationWiped)
        } else if self.fuel == 0 {
            Some(LossCause::OutOfSoap)
        } else {
            None
        }
    }
}
