//! Marker components for the HUD and screen effects.
//!
//! The [`ui`](crate::systems::ui) systems find their targets through these
//! markers and project [`PlayerState`](crate::resources::playerstate::PlayerState)
//! onto them every frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// The soap meter bar. Its horizontal scale is the fuel fill level.
#[derive(Component, Debug, Clone, Copy)]
pub struct SoapMeter;

/// The "Score: N" label.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScoreText;

/// Full-screen rectangle tinted red when a virus gets through.
#[derive(Component, Debug, Clone, Copy)]
pub struct Flasher;

/// Dark curtain that fades in after game over.
#[derive(Component, Debug, Clone, Copy)]
pub struct GameOverCurtain;

/// The "GAME OVER" label.
#[derive(Component, Debug, Clone, Copy)]
pub struct GameOverText;

/// Which counter a row of icons displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Slowdown,
    Nuke,
    Population,
}

/// One icon of a counter row. It is visible while `index < shown count`.
#[derive(Component, Debug, Clone, Copy)]
pub struct CounterIcon {
    pub counter: CounterKind,
    pub index: usize,
}

/// Layout of a row of counter icons.
///
/// Icons advance by `minor_sep`; after `break_count` icons a new line starts
/// one `major_sep` further. A `break_count` of zero never wraps.
#[derive(Debug, Clone, Copy)]
pub struct CounterLayout {
    pub origin: Vector2,
    pub max_count: usize,
    pub break_count: usize,
    pub minor_sep: Vector2,
    pub major_sep: Vector2,
}

impl CounterLayout {
    /// A single upward stack, as used by the powerup rows.
    pub fn stack(origin: Vector2, max_count: usize) -> Self {
        Self {
            origin,
            max_count,
            break_count: 0,
            minor_sep: Vector2::new(0.0, -30.0),
            major_sep: Vector2::new(100.0, 0.0),
        }
    }

    /// World position of icon `index`.
    pub fn position(&self, index: usize) -> Vector2 {
        let (minor, major) = if self.break_count > 0 {
            (index % self.break_count, index / self.break_count)
        } else {
            (index, 0)
        };
        self.origin + self.minor_sep.scale_by(minor as f32) + self.major_sep.scale_by(major as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_goes_up() {
        let layout = CounterLayout::stack(Vector2::new(450.0, 110.0), 3);
        let p = layout.position(2);
        assert_eq!((p.x, p.y), (450.0, 50.0));
    }

    #[test]
    fn test_grid_wraps_after_break_count() {
        let layout = CounterLayout {
            origin: Vector2::new(-620.0, 250.0),
            max_count: 500,
            break_count: 40,
            minor_sep: Vector2::new(7.0, 0.0),
            major_sep: Vector2::new(0.0, 12.0),
        };
        let p39 = layout.position(39);
        let p40 = layout.position(40);
        let p85 = layout.position(85);
        assert_eq!((p39.x, p39.y), (-620.0 + 273.0, 250.0));
        assert_eq!((p40.x, p40.y), (-620.0, 262.0));
        assert_eq!((p85.x, p85.y), (-620.0 + 35.0, 274.0));
    }
}
