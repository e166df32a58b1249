//! Solid rectangle component.
//!
//! [`Fill`] draws an axis-aligned rectangle centred on the entity's
//! [`MapPosition`](super::mapposition::MapPosition). The screen flash and the
//! game-over curtain are fills whose [`Tint`](super::tint::Tint) is tweened.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct Fill {
    pub size: Vector2,
}

impl Fill {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }
}
