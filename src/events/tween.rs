//! Tween completion event.

use bevy_ecs::prelude::*;

use crate::components::tween::TweenCallback;

/// A one-shot tween carrying a callback reached its end.
///
/// The tween component has already been removed from `entity` when this
/// fires.
#[derive(Event, Debug, Clone, Copy)]
pub struct TweenFinishedEvent {
    pub entity: Entity,
    pub callback: TweenCallback,
}
