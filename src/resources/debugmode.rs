//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering
//! (hitboxes, pivots, counters) should be drawn. Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws its debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
