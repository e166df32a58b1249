//! Player components.
//!
//! The soap bar is tagged with [`Player`] and owns a [`LaneMovement`] state
//! machine. A move can only start from rest: while the position tween runs,
//! or while an oil pickup has the soap frozen, lane requests are dropped.

use bevy_ecs::prelude::Component;

use crate::lanes::{START_LANE, target_lane};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Discrete lane index plus in-transit and frozen flags.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMovement {
    pub current_lane: usize,
    pub is_moving: bool,
    pub is_frozen: bool,
}

impl Default for LaneMovement {
    fn default() -> Self {
        Self {
            current_lane: START_LANE,
            is_moving: false,
            is_frozen: false,
        }
    }
}

impl LaneMovement {
    /// Try to start a move of `direction` lanes.
    ///
    /// On success the state becomes moving, `current_lane` already points at
    /// the destination, and the destination is returned.
    pub fn begin_move(&mut self, direction: i32) -> Option<usize> {
        if self.is_moving || self.is_frozen {
            return None;
        }
        let target = target_lane(self.current_lane, direction)?;
        self.is_moving = true;
        self.current_lane = target;
        Some(target)
    }

    pub fn end_move(&mut self) {
        self.is_moving = false;
    }

    /// Freeze the soap. Returns false when it was already frozen.
    pub fn freeze(&mut self) -> bool {
        if self.is_frozen {
            return false;
        }
        self.is_frozen = true;
        true
    }

    pub fn unfreeze(&mut self) {
        self.is_frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_in_middle_lane() {
        let lm = LaneMovement::default();
        assert_eq!(lm.current_lane, 2);
        assert!(!lm.is_moving);
        assert!(!lm.is_frozen);
    }

    #[test]
    fn test_move_while_moving_is_dropped() {
        let mut lm = LaneMovement::default();
        assert_eq!(lm.begin_move(-1), Some(1));
        assert_eq!(lm.begin_move(-1), None);
        assert_eq!(lm.current_lane, 1);
        lm.end_move();
        assert_eq!(lm.begin_move(-1), Some(0));
    }

    #[test]
    fn test_edges_are_no_ops() {
        let mut lm = LaneMovement {
            current_lane: 0,
            ..Default::default()
        };
        assert_eq!(lm.begin_move(-1), None);
        assert!(!lm.is_moving);
        lm.current_lane = 4;
        assert_eq!(lm.begin_move(1), None);
        assert_eq!(lm.current_lane, 4);
        assert!(!lm.is_moving);
    }

    #[test]
    fn test_frozen_blocks_moves() {
        let mut lm = LaneMovement::default();
        assert!(lm.freeze());
        assert!(!lm.freeze());
        assert_eq!(lm.begin_move(1), None);
        lm.unfreeze();
        assert_eq!(lm.begin_move(1), Some(3));
    }

    #[test]
    fn test_random_inputs_keep_lane_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut lm = LaneMovement::default();
        for _ in 0..1000 {
            match rng.u8(0..4) {
                0 => {
                    lm.begin_move(if rng.bool() { 1 } else { -1 });
                }
                1 => lm.end_move(),
                2 => {
                    lm.freeze();
                }
                _ => lm.unfreeze(),
            }
            assert!(lm.current_lane < 5);
        }
    }
}
