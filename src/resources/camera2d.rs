//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera looks at the world origin and
//! the shake system nudges its target.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// Resolution the play field is laid out for.
pub const VIRTUAL_WIDTH: f32 = 1280.0;
pub const VIRTUAL_HEIGHT: f32 = 720.0;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centred on the world origin, zoomed so the virtual play field
    /// fits a `width` x `height` screen.
    pub fn centered(width: f32, height: f32) -> Self {
        let zoom = (width / VIRTUAL_WIDTH).min(height / VIRTUAL_HEIGHT);
        Self(Camera2D {
            target: Vector2 { x: 0.0, y: 0.0 },
            offset: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            rotation: 0.0,
            zoom: if zoom > 0.0 { zoom } else { 1.0 },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_camera_fits_virtual_field() {
        let cam = Camera2DRes::centered(1280.0, 720.0).0;
        assert_eq!(cam.offset.x, 640.0);
        assert_eq!(cam.offset.y, 360.0);
        assert_eq!(cam.zoom, 1.0);

        let wide = Camera2DRes::centered(2560.0, 720.0).0;
        assert_eq!(wide.zoom, 1.0);

        let big = Camera2DRes::centered(1920.0, 1080.0).0;
        assert!((big.zoom - 1.5).abs() < 1e-6);
    }
}
