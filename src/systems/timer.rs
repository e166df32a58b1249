//! Timer system.
//!
//! Advances every [`Timer`] by the frame delta and triggers one
//! [`TimerEvent`] per expiration. A repeating timer that expired several
//! times during a long frame fires once per expiration.

use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut timer) in query.iter_mut() {
        let fired = timer.tick(dt);
        for _ in 0..fired {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal,
            });
        }
    }
}
