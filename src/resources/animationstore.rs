//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems can look up an animation by a string
//! key and drive playback based on the immutable parameters stored here.
//! Definitions are registered at setup from the sprite catalogue once the
//! sheet width, and with it the frame count, is known.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::assets::SpriteDef;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// Immutable data describing a horizontal sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Top-left corner of the first frame in the sheet.
    pub position: Vector2,
    /// Per-frame displacement along x.
    pub displacement: f32,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Looping animation over a sheet `sheet_width` pixels wide.
    ///
    /// Returns `None` for sprites that are not animated.
    pub fn from_sheet(def: &SpriteDef, sheet_width: f32) -> Option<Self> {
        let frame_ms = def.frame_ms?;
        let frame_w = def.frame_size.0;
        let frames = ((sheet_width - def.source_offset.0) / frame_w).floor().max(1.0);
        Some(Self {
            tex_key: Arc::from(def.key),
            position: def.offset(),
            displacement: frame_w,
            frame_count: frames as usize,
            fps: 1000.0 / frame_ms,
            looped: true,
        })
    }
}
