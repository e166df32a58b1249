//! Camera shake countdown.

use bevy_ecs::prelude::Resource;

/// Frames of shake requested by the screen flash.
pub const FLASH_SHAKE_TICKS: u32 = 15;
/// Largest camera offset while shaking, world units.
pub const SHAKE_AMPLITUDE: f32 = 10.0;

/// Remaining shake frames. The last frame recentres the camera.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CameraShake {
    pub ticks: u32,
}

impl CameraShake {
    pub fn start(&mut self) {
        self.ticks = FLASH_SHAKE_TICKS;
    }
}
