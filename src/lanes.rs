//! Lane geometry of the play field.
//!
//! The play field has [`LANE_COUNT`] vertical lanes centred on the world
//! origin. The player sits on the hero row near the bottom of the screen and
//! falling runners enter from the enemy row above the top edge.

use arrayvec::ArrayVec;
use raylib::prelude::Vector2;

pub const LANE_COUNT: usize = 5;
/// Lane the player starts in.
pub const START_LANE: usize = 2;
/// Horizontal distance between two lane centres.
pub const LANE_SPACING: f32 = 109.0;
/// X offset of the middle lane.
pub const LANE_CENTER_X: f32 = 3.0;
pub const HERO_ROW_Y: f32 = 220.0;
pub const ENEMY_ROW_Y: f32 = -500.0;
/// Y of the boundary that catches runners the player missed.
pub const BORDER_Y: f32 = 350.0;
pub const BORDER_HALF_WIDTH: f32 = 600.0;

/// X coordinate of lane `index`.
pub fn lane_x(index: usize) -> f32 {
    LANE_CENTER_X + LANE_SPACING * (index as f32 - START_LANE as f32)
}

fn slots_at(y: f32) -> ArrayVec<Vector2, LANE_COUNT> {
    (0..LANE_COUNT).map(|i| Vector2::new(lane_x(i), y)).collect()
}

/// Positions the player can occupy, left to right.
pub fn hero_slots() -> ArrayVec<Vector2, LANE_COUNT> {
    slots_at(HERO_ROW_Y)
}

/// Spawn positions of falling runners, left to right.
pub fn enemy_slots() -> ArrayVec<Vector2, LANE_COUNT> {
    slots_at(ENEMY_ROW_Y)
}

/// Lane reached by moving `direction` lanes from `current`, if it exists.
pub fn target_lane(current: usize, direction: i32) -> Option<usize> {
    let target = current as i64 + direction as i64;
    if (0..LANE_COUNT as i64).contains(&target) {
        Some(target as usize)
    } else {
        None
    }
}
