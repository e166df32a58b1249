//! Screen feedback: the red flash and the camera shake.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::tint::Tint;
use crate::components::tween::{TweenCallback, TweenTint};
use crate::components::ui::Flasher;
use crate::events::gameplay::FlashEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::camerashake::{CameraShake, SHAKE_AMPLITUDE};
use crate::resources::rng::GameRng;

pub const FLASH_COLOR: Color = Color::new(255, 0, 0, 76);
pub const FLASH_IN: f32 = 0.2;
pub const FLASH_OUT: f32 = 0.1;

/// Shake the camera and pulse the flasher red, then back to transparent.
pub fn flash_observer(
    _trigger: On<FlashEvent>,
    mut commands: Commands,
    mut shake: ResMut<CameraShake>,
    flashers: Query<(Entity, &Tint), With<Flasher>>,
) {
    shake.start();
    for (entity, tint) in flashers.iter() {
        commands.entity(entity).try_insert(
            TweenTint::new(tint.color, FLASH_COLOR, FLASH_IN).with_on_finish(
                TweenCallback::TintTo {
                    color: Color::new(0, 0, 0, 0),
                    duration: FLASH_OUT,
                },
            ),
        );
    }
}

/// Offset the camera randomly while shake frames remain. The last frame puts
/// it back on the origin.
pub fn camera_shake_system(
    mut shake: ResMut<CameraShake>,
    mut camera: ResMut<Camera2DRes>,
    mut rng: ResMut<GameRng>,
) {
    if shake.ticks == 0 {
        return;
    }
    shake.ticks -= 1;
    camera.0.target = if shake.ticks == 0 {
        Vector2::zero()
    } else {
        Vector2::new(
            rng.range_f32(-SHAKE_AMPLITUDE, SHAKE_AMPLITUDE),
            rng.range_f32(-SHAKE_AMPLITUDE, SHAKE_AMPLITUDE),
        )
    };
}
