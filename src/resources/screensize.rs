//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The debug overlay
//! reads it to place its text.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
