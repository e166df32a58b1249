//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered. The observer in
//! [`crate::systems::runners`] matches on the [`TimerSignal`] to spawn
//! runners, ramp the difficulty or end a slowdown.
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the timer component
//! - [`crate::systems::timer::update_timers`] – the system that emits these events

use bevy_ecs::prelude::*;

use crate::components::timer::TimerSignal;

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    pub signal: TimerSignal,
}
