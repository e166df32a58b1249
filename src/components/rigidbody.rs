//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the linear and angular velocity of an
//! entity. The [`movement_system`](crate::systems::movement::movement_system)
//! integrates it into [`MapPosition`](super::mapposition::MapPosition) and
//! [`Rotation`](super::rotation::Rotation) every frame. There are no forces:
//! runners fall at the speed they were spawned with until a slowdown scales it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `angular_velocity` - Spin in degrees per second
/// - `frozen` - When true, the movement system skips this entity
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub angular_velocity: f32,
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            angular_velocity: 0.0,
            frozen: false,
        }
    }

    /// Create a RigidBody with the given linear and angular velocity.
    pub fn with_velocity(velocity: Vector2, angular_velocity: f32) -> Self {
        Self {
            velocity,
            angular_velocity,
            frozen: false,
        }
    }

    /// Multiply the linear velocity by `fraction`.
    pub fn scale_velocity(&mut self, fraction: f32) {
        self.velocity = self.velocity.scale_by(fraction);
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.angular_velocity, 0.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn test_scale_velocity_compounds() {
        let mut rb = RigidBody::with_velocity(Vector2 { x: 0.0, y: 400.0 }, 10.0);
        rb.scale_velocity(0.65);
        assert!(approx_eq(rb.velocity.y, 260.0));
        rb.scale_velocity(0.65);
        assert!(approx_eq(rb.velocity.y, 169.0));
        assert!(approx_eq(rb.angular_velocity, 10.0));
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
