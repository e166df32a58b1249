//! 2D sprite rendering component.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::assets::SpriteDef;

/// Sprite is identified by a texture key, its size in world units and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in pixels) relative to the frame's top-left
/// used for placement/rotation/scaling when rendering.
/// When the texture is not loaded the renderer fills the frame with `fallback`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: &'static str,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
    pub fallback: Color,
}

impl Sprite {
    /// Sprite showing the first frame of `def`, pivoted on its centre.
    pub fn from_def(def: &SpriteDef) -> Self {
        let size = def.size();
        Self {
            tex_key: def.key,
            width: size.x,
            height: size.y,
            offset: def.offset(),
            origin: Vector2::new(size.x * 0.5, size.y * 0.5),
            flip_h: false,
            flip_v: false,
            fallback: def.fallback,
        }
    }

    /// Replace the pivot point.
    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }
}
