//! Scheduled callback component.
//!
//! A [`Timer`] counts seconds and, once `duration` is reached, the
//! [`update_timers`](crate::systems::timer::update_timers) system triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying its
//! [`TimerSignal`]. Repeating timers keep the overshoot so the period does not
//! drift; one-shot timers stop and can be re-armed later.

use bevy_ecs::prelude::Component;

/// What a timer is for. Observers match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSignal {
    /// Roll whether a runner appears.
    SpawnTick,
    /// Raise the difficulty speed modifier.
    DifficultyTick,
    /// End of the slowdown powerup.
    SlowdownCooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Once,
    Repeat,
}

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: TimerSignal,
    pub mode: TimerMode,
    pub running: bool,
}

impl Timer {
    /// A running timer that fires every `duration` seconds.
    pub fn repeating(duration: f32, signal: TimerSignal) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal,
            mode: TimerMode::Repeat,
            running: true,
        }
    }

    /// A one-shot timer that waits for [`Timer::arm`] before counting.
    pub fn once_idle(duration: f32, signal: TimerSignal) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal,
            mode: TimerMode::Once,
            running: false,
        }
    }

    /// Start counting from zero. Arming a running timer restarts it.
    pub fn arm(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `dt` and return how many times the timer fired.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.running || self.duration <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.duration {
            fired += 1;
            match self.mode {
                TimerMode::Repeat => self.elapsed -= self.duration,
                TimerMode::Once => {
                    self.elapsed = 0.0;
                    self.running = false;
                    break;
                }
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeating_fires_each_period() {
        let mut t = Timer::repeating(0.2, TimerSignal::SpawnTick);
        assert_eq!(t.tick(0.1), 0);
        assert_eq!(t.tick(0.1), 1);
        assert_eq!(t.tick(0.1), 0);
        assert_eq!(t.tick(0.1), 1);
    }

    #[test]
    fn test_repeating_catches_up_on_long_frames() {
        let mut t = Timer::repeating(0.25, TimerSignal::DifficultyTick);
        assert_eq!(t.tick(1.0), 4);
        assert!(t.elapsed.abs() < 1e-6);
    }

    #[test]
    fn test_once_idle_waits_for_arm() {
        let mut t = Timer::once_idle(3.0, TimerSignal::SlowdownCooldown);
        assert_eq!(t.tick(10.0), 0);
        t.arm();
        assert_eq!(t.tick(2.0), 0);
        assert_eq!(t.tick(1.0), 1);
        assert!(!t.running);
        assert_eq!(t.tick(5.0), 0);
    }

    #[test]
    fn test_rearm_restarts_the_countdown() {
        let mut t = Timer::once_idle(3.0, TimerSignal::SlowdownCooldown);
        t.arm();
        assert_eq!(t.tick(2.5), 0);
        t.arm();
        assert_eq!(t.tick(2.5), 0);
        assert_eq!(t.tick(0.5), 1);
    }

    #[test]
    fn test_zero_duration_never_fires() {
        let mut t = Timer::repeating(0.0, TimerSignal::SpawnTick);
        assert_eq!(t.tick(1.0), 0);
    }
}
