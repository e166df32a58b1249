//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_mapposition_system`] – animates [`MapPosition`](crate::components::mapposition::MapPosition)
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//! - [`tween_tint_system`] – animates [`Tint`](crate::components::tint::Tint)
//!
//! Each tween component specifies start/end values, duration, easing function,
//! and loop mode. The systems read delta time from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and interpolate the property accordingly. A tween that ends (modes
//! [`LoopMode::Once`] and [`LoopMode::Yoyo`]) is removed from its entity, and
//! its callback, if any, is delivered through a [`TweenFinishedEvent`] to
//! [`tween_finished_observer`].

use crate::components::mapposition::MapPosition;
use crate::components::player::LaneMovement;
use crate::components::scale::Scale;
use crate::components::tint::{Tint, lerp_color};
use crate::components::tween::{
    Easing, LoopMode, TweenCallback, TweenPosition, TweenScale, TweenTint,
};
use crate::events::tween::TweenFinishedEvent;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::math::Vector2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance tween time and handle looping/completion.
///
/// Returns `true` on the frame the tween ends for good.
pub(crate) fn advance(
    time: &mut f32,
    duration: f32,
    forward: &mut bool,
    playing: &mut bool,
    mode: LoopMode,
    dt: f32,
) -> bool {
    if duration <= 0.0 {
        *time = if mode == LoopMode::Yoyo { 0.0 } else { duration };
        *playing = false;
        return true;
    }

    let dir = if *forward { 1.0 } else { -1.0 };
    *time += dt * dir;

    let finished_forward = *forward && *time >= duration;
    let finished_backward = !*forward && *time <= 0.0;

    if !(finished_forward || finished_backward) {
        return false;
    }
    match mode {
        LoopMode::Once => {
            *playing = false;
            *time = time.clamp(0.0, duration);
            true
        }
        LoopMode::Loop => {
            *time = if finished_forward {
                *time - duration
            } else {
                *time + duration
            };
            false
        }
        LoopMode::Yoyo => {
            *time = time.clamp(0.0, duration);
            if finished_forward {
                *forward = false;
                false
            } else {
                *playing = false;
                true
            }
        }
    }
}

fn finish<T: Component>(commands: &mut Commands, entity: Entity, callback: Option<TweenCallback>) {
    commands.entity(entity).try_remove::<T>();
    if let Some(callback) = callback {
        commands.trigger(TweenFinishedEvent { entity, callback });
    }
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut TweenPosition)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut mp, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let tw = &mut *tw;
        let done = advance(
            &mut tw.time,
            tw.duration,
            &mut tw.forward,
            &mut tw.playing,
            tw.loop_mode,
            dt,
        );
        let t = if tw.duration > 0.0 {
            ease(tw.easing, tw.time / tw.duration)
        } else {
            1.0
        };
        mp.pos = lerp_v2(tw.from, tw.to, t);
        if done {
            finish::<TweenPosition>(&mut commands, entity, tw.on_finish);
        }
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Scale, &mut TweenScale)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut scale, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let tw = &mut *tw;
        let done = advance(
            &mut tw.time,
            tw.duration,
            &mut tw.forward,
            &mut tw.playing,
            tw.loop_mode,
            dt,
        );
        let t = if tw.duration > 0.0 {
            ease(tw.easing, tw.time / tw.duration)
        } else {
            1.0
        };
        scale.scale = lerp_v2(tw.from, tw.to, t);
        if done {
            finish::<TweenScale>(&mut commands, entity, tw.on_finish);
        }
    }
}

/// Animate entity tints based on [`TweenTint`] components.
pub fn tween_tint_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Tint, &mut TweenTint)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tint, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let tw = &mut *tw;
        let done = advance(
            &mut tw.time,
            tw.duration,
            &mut tw.forward,
            &mut tw.playing,
            tw.loop_mode,
            dt,
        );
        let t = if tw.duration > 0.0 {
            ease(tw.easing, tw.time / tw.duration)
        } else {
            1.0
        };
        tint.color = lerp_color(tw.from, tw.to, t);
        if done {
            finish::<TweenTint>(&mut commands, entity, tw.on_finish);
        }
    }
}

/// Run the follow-up attached to a finished tween.
pub fn tween_finished_observer(
    trigger: On<TweenFinishedEvent>,
    mut commands: Commands,
    mut movers: Query<&mut LaneMovement>,
    tints: Query<&Tint>,
) {
    let TweenFinishedEvent { entity, callback } = *trigger.event();
    debug!("Tween finished on {:?}: {:?}", entity, callback);
    match callback {
        TweenCallback::Despawn => {
            commands.entity(entity).try_despawn();
        }
        TweenCallback::EndLaneMove => {
            if let Ok(mut movement) = movers.get_mut(entity) {
                movement.end_move();
            }
        }
        TweenCallback::EndFreeze => {
            if let Ok(mut movement) = movers.get_mut(entity) {
                movement.unfreeze();
            }
        }
        TweenCallback::TintTo { color, duration } => {
            let from = tints.get(entity).map(|t| t.color).unwrap_or(color);
            commands
                .entity(entity)
                .try_insert(TweenTint::new(from, color, duration));
        }
    }
}
