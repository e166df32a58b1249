//! Tween components for animated interpolation.
//!
//! This module provides components for smoothly animating entity properties
//! over time:
//! - [`TweenPosition`] – animate [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenScale`] – animate [`Scale`](super::scale::Scale)
//! - [`TweenTint`] – animate [`Tint`](super::tint::Tint)
//!
//! Each tween supports multiple [`Easing`] functions and [`LoopMode`] settings.
//! A tween that ends may carry a [`TweenCallback`]; the tween systems remove
//! the finished component and trigger a
//! [`TweenFinishedEvent`](crate::events::tween::TweenFinishedEvent) with it.
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished.
    Loop,
    /// Play forward, then backward once, then stop.
    Yoyo,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
}

/// Follow-up run when a tween ends.
#[derive(Copy, Clone, Debug)]
pub enum TweenCallback {
    /// Despawn the tweened entity.
    Despawn,
    /// The player reached its destination lane.
    EndLaneMove,
    /// The player's freeze wore off.
    EndFreeze,
    /// Start a new tint tween from the current colour.
    TintTo { color: Color, duration: f32 },
}

/// Animates an entity's [`MapPosition`](super::mapposition::MapPosition) between two points.
///
/// The tween interpolates `from` to `to` over `duration` seconds using the
/// specified `easing` function and `loop_mode`.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting position.
    pub from: Vector2,
    /// Ending position.
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Behavior when the tween ends.
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
    /// Run once the tween stops.
    pub on_finish: Option<TweenCallback>,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
            on_finish: None,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
    pub fn with_on_finish(mut self, callback: TweenCallback) -> Self {
        self.on_finish = Some(callback);
        self
    }
}

/// Animates an entity's [`Scale`](super::scale::Scale) between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    pub from: Vector2,
    pub to: Vector2,
    pub duration: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
    pub playing: bool,
    pub time: f32,
    pub forward: bool,
    pub on_finish: Option<TweenCallback>,
}

impl TweenScale {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
            on_finish: None,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_on_finish(mut self, callback: TweenCallback) -> Self {
        self.on_finish = Some(callback);
        self
    }
}

/// Animates an entity's [`Tint`](super::tint::Tint) between two colours.
#[derive(Component, Clone, Debug)]
pub struct TweenTint {
    pub from: Color,
    pub to: Color,
    pub duration: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
    pub playing: bool,
    pub time: f32,
    pub forward: bool,
    pub on_finish: Option<TweenCallback>,
}

impl TweenTint {
    pub fn new(from: Color, to: Color, duration: f32) -> Self {
        TweenTint {
            from,
            to,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
            on_finish: None,
        }
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
    pub fn with_on_finish(mut self, callback: TweenCallback) -> Self {
        self.on_finish = Some(callback);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_position_defaults() {
        let tw = TweenPosition::new(Vector2::zero(), Vector2::new(10.0, 0.0), 0.15);
        assert_eq!(tw.easing, Easing::Linear);
        assert_eq!(tw.loop_mode, LoopMode::Once);
        assert!(tw.playing);
        assert!(tw.forward);
        assert_eq!(tw.time, 0.0);
        assert!(tw.on_finish.is_none());
    }

    #[test]
    fn test_builders_chain() {
        let tw = TweenPosition::new(Vector2::zero(), Vector2::new(0.0, 900.0), 9.0)
            .with_loop_mode(LoopMode::Loop)
            .with_easing(Easing::QuadOut)
            .with_on_finish(TweenCallback::Despawn);
        assert_eq!(tw.loop_mode, LoopMode::Loop);
        assert_eq!(tw.easing, Easing::QuadOut);
        assert!(matches!(tw.on_finish, Some(TweenCallback::Despawn)));
    }

    #[test]
    fn test_tint_tween_carries_follow_up() {
        let tw = TweenTint::new(Color::new(0, 0, 0, 0), Color::new(255, 0, 0, 76), 0.2)
            .with_on_finish(TweenCallback::TintTo {
                color: Color::new(0, 0, 0, 0),
                duration: 0.1,
            });
        match tw.on_finish {
            Some(TweenCallback::TintTo { color, duration }) => {
                assert_eq!(color.a, 0);
                assert_eq!(duration, 0.1);
            }
            other => panic!("unexpected callback {other:?}"),
        }
    }
}
