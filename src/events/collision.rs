//! Collision event type.
//!
//! The collision detector emits [`CollisionEvent`] once when two tagged
//! hitboxes start overlapping. The rule observer in
//! [`crate::systems::collision`] turns it into gameplay.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider start to overlap.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
