//! Velocity integration.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::resources::worldtime::WorldTime;

/// Move every unfrozen body by its velocity and spin it by its angular
/// velocity (degrees per second).
pub fn movement_system(
    mut query: Query<(&mut MapPosition, Option<&mut Rotation>, &RigidBody)>,
    time: Res<WorldTime>,
) {
    for (mut position, rotation, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;
        if let Some(mut rotation) = rotation {
            rotation.degrees += rigidbody.angular_velocity * time.delta;
        }
    }
}
