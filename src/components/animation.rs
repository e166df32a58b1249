//! Sprite-sheet playback state.
//!
//! [`Animation`] points at an entry of the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) and
//! tracks which frame is showing. The
//! [`animation`](crate::systems::animation::animation) system advances it.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }
}
