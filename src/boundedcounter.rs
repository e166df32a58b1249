//! Clamped integer counter.
//!
//! [`BoundedCounter`] stores a value that always stays inside an inclusive
//! `[min, max]` range. Every mutation goes through a single clamp, so callers
//! can add or subtract arbitrary amounts without checking bounds first.
//!
//! Counters compare directly against bare integers, which keeps gameplay
//! checks such as `fuel == 0` or `charges > 0` readable.
//!
//! # Related
//!
//! - [`crate::resources::playerstate::PlayerState`] – the counters of one playthrough

use std::cmp::Ordering;
use std::fmt;

/// Integer counter clamped to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i32,
    min: i32,
    max: i32,
    initial: i32,
}

impl BoundedCounter {
    /// Create a counter starting at `initial`.
    ///
    /// The starting value is clamped like any other write, and a reversed
    /// range is normalized so that `min <= max` always holds.
    pub fn new(initial: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let initial = initial.clamp(min, max);
        Self {
            value: initial,
            min,
            max,
            initial,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn initial(&self) -> i32 {
        self.initial
    }

    /// Add `delta`, saturating at the bounds.
    pub fn increase(&mut self, delta: i32) {
        self.set(self.value.saturating_add(delta));
    }

    /// Subtract `delta`, saturating at the bounds.
    pub fn decrease(&mut self, delta: i32) {
        self.set(self.value.saturating_sub(delta));
    }

    /// Restore the initial value, or set `value` (clamped) when given.
    pub fn reset(&mut self, value: Option<i32>) {
        self.set(value.unwrap_or(self.initial));
    }

    /// Fill level in `[0.0, 1.0]` relative to the maximum.
    pub fn fraction_of_max(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.value as f32 / self.max as f32
        }
    }

    fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }
}

impl From<BoundedCounter> for i32 {
    fn from(counter: BoundedCounter) -> Self {
        counter.value
    }
}

impl PartialEq<i32> for BoundedCounter {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl PartialOrd<i32> for BoundedCounter {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl fmt::Display for BoundedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..={}]", self.value, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_initial() {
        let c = BoundedCounter::new(300, 0, 10000);
        assert_eq!(c.value(), 300);
        assert_eq!(c.initial(), 300);
        assert_eq!(c.min(), 0);
        assert_eq!(c.max(), 10000);
    }

    #[test]
    fn test_new_clamps_initial() {
        let c = BoundedCounter::new(12, 0, 3);
        assert_eq!(c.value(), 3);
    }

    #[test]
    fn test_new_normalizes_reversed_range() {
        let c = BoundedCounter::new(5, 10, 0);
        assert_eq!(c.min(), 0);
        assert_eq!(c.max(), 10);
        assert_eq!(c, 5);
    }

    #[test]
    fn test_increase_clamps_to_max() {
        let mut c = BoundedCounter::new(0, 0, 3);
        c.increase(2);
        assert_eq!(c, 2);
        c.increase(5);
        assert_eq!(c, 3);
    }

    #[test]
    fn test_decrease_clamps_to_min() {
        let mut c = BoundedCounter::new(50000, 0, 50000);
        c.decrease(49999);
        assert_eq!(c, 1);
        c.decrease(16);
        assert_eq!(c, 0);
    }

    #[test]
    fn test_negative_delta_moves_the_other_way() {
        let mut c = BoundedCounter::new(5, 0, 10);
        c.increase(-3);
        assert_eq!(c, 2);
        c.decrease(-20);
        assert_eq!(c, 10);
    }

    #[test]
    fn test_extreme_deltas_do_not_overflow() {
        let mut c = BoundedCounter::new(0, -5, 5);
        c.increase(i32::MAX);
        assert_eq!(c, 5);
        c.decrease(i32::MAX);
        c.decrease(i32::MAX);
        assert_eq!(c, -5);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut c = BoundedCounter::new(300, 0, 10000);
        c.decrease(123);
        c.increase(7);
        c.reset(None);
        assert_eq!(c.value(), 300);
    }

    #[test]
    fn test_reset_with_value_is_clamped() {
        let mut c = BoundedCounter::new(0, 0, 3);
        c.reset(Some(2));
        assert_eq!(c, 2);
        c.reset(Some(99));
        assert_eq!(c, 3);
        c.reset(Some(-4));
        assert_eq!(c, 0);
    }

    #[test]
    fn test_scalar_comparisons() {
        let c = BoundedCounter::new(1, 0, 3);
        assert!(c > 0);
        assert!(c < 2);
        assert!(c >= 1);
        assert!(c != 0);
        assert_eq!(i32::from(c), 1);
    }

    #[test]
    fn test_fraction_of_max() {
        let mut c = BoundedCounter::new(50000, 0, 50000);
        assert!((c.fraction_of_max() - 1.0).abs() < 1e-6);
        c.decrease(25000);
        assert!((c.fraction_of_max() - 0.5).abs() < 1e-6);
        let zero = BoundedCounter::new(0, 0, 0);
        assert_eq!(zero.fraction_of_max(), 0.0);
    }

    #[test]
    fn test_random_operations_stay_in_range() {
        let mut rng = fastrand::Rng::with_seed(0x50A9);
        for _ in 0..200 {
            let min = rng.i32(-1000..1000);
            let max = min + rng.i32(0..2000);
            let mut c = BoundedCounter::new(rng.i32(-5000..5000), min, max);
            for _ in 0..100 {
                let delta = rng.i32(-3000..3000);
                match rng.u8(0..3) {
                    0 => c.increase(delta),
                    1 => c.decrease(delta),
                    _ => c.reset(if rng.bool() { Some(delta) } else { None }),
                }
                assert!(c.value() >= min && c.value() <= max, "{c}");
            }
        }
    }
}
