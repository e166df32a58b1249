//! Falling runners.
//!
//! Everything that drops down the lanes is a [`Runner`]: viruses the player
//! must intercept and pickups it may catch. The closed [`RunnerKind`] enum
//! selects the per-kind [`RunnerProfile`] (trigger role and sprite).

use bevy_ecs::prelude::Component;

use crate::assets::{ANTIVIRUS, LIQUID_SOAP, MINI_SOAP, OIL, SpriteDef, VIRUS};
use crate::components::collision::TriggerTag;

/// Side of the square hitbox every runner uses.
pub const RUNNER_HITBOX: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerKind {
    /// Virus. Costs a person when it reaches the border.
    Hazard,
    /// Oil drop. Freezes the soap in place for a moment.
    OilFreeze,
    /// Mini soap. Refills the soap meter.
    FuelPickup,
    /// Liquid soap. Grants a slowdown charge.
    SlowdownPickup,
    /// Antivirus. Grants a nuke charge.
    NukePickup,
}

/// Static configuration of a runner kind.
#[derive(Debug, Clone, Copy)]
pub struct RunnerProfile {
    pub trigger: TriggerTag,
    pub sprite: SpriteDef,
}

const HAZARD_PROFILE: RunnerProfile = RunnerProfile {
    trigger: TriggerTag::Hazard,
    sprite: VIRUS,
};
const OIL_PROFILE: RunnerProfile = RunnerProfile {
    trigger: TriggerTag::Pickup,
    sprite: OIL,
};
const FUEL_PROFILE: RunnerProfile = RunnerProfile {
    trigger: TriggerTag::Pickup,
    sprite: MINI_SOAP,
};
const SLOWDOWN_PROFILE: RunnerProfile = RunnerProfile {
    trigger: TriggerTag::Pickup,
    sprite: LIQUID_SOAP,
};
const NUKE_PROFILE: RunnerProfile = RunnerProfile {
    trigger: TriggerTag::Pickup,
    sprite: ANTIVIRUS,
};

impl RunnerKind {
    pub const ALL: [RunnerKind; 5] = [
        RunnerKind::Hazard,
        RunnerKind::OilFreeze,
        RunnerKind::FuelPickup,
        RunnerKind::SlowdownPickup,
        RunnerKind::NukePickup,
    ];

    /// Pick a kind from a uniform roll in `[0, 1)`.
    ///
    /// Bucket edges belong to the upper bucket: 0.10 is a fuel pickup, not oil.
    pub fn from_roll(r: f32) -> Self {
        if r < 0.10 {
            RunnerKind::OilFreeze
        } else if r < 0.25 {
            RunnerKind::FuelPickup
        } else if r < 0.30 {
            RunnerKind::SlowdownPickup
        } else if r < 0.35 {
            RunnerKind::NukePickup
        } else {
            RunnerKind::Hazard
        }
    }

    pub fn profile(self) -> &'static RunnerProfile {
        match self {
            RunnerKind::Hazard => &HAZARD_PROFILE,
            RunnerKind::OilFreeze => &OIL_PROFILE,
            RunnerKind::FuelPickup => &FUEL_PROFILE,
            RunnerKind::SlowdownPickup => &SLOWDOWN_PROFILE,
            RunnerKind::NukePickup => &NUKE_PROFILE,
        }
    }

    pub fn is_hazard(self) -> bool {
        matches!(self, RunnerKind::Hazard)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Runner {
    pub kind: RunnerKind,
    /// Set once destruction started. Further contacts and destroy requests are ignored.
    pub destroying: bool,
}

impl Runner {
    pub fn new(kind: RunnerKind) -> Self {
        Self {
            kind,
            destroying: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_buckets() {
        assert_eq!(RunnerKind::from_roll(0.0), RunnerKind::OilFreeze);
        assert_eq!(RunnerKind::from_roll(0.099), RunnerKind::OilFreeze);
        assert_eq!(RunnerKind::from_roll(0.2), RunnerKind::FuelPickup);
        assert_eq!(RunnerKind::from_roll(0.27), RunnerKind::SlowdownPickup);
        assert_eq!(RunnerKind::from_roll(0.32), RunnerKind::NukePickup);
        assert_eq!(RunnerKind::from_roll(0.5), RunnerKind::Hazard);
        assert_eq!(RunnerKind::from_roll(0.9999), RunnerKind::Hazard);
    }

    #[test]
    fn test_roll_boundaries_go_to_upper_bucket() {
        assert_eq!(RunnerKind::from_roll(0.10), RunnerKind::FuelPickup);
        assert_eq!(RunnerKind::from_roll(0.25), RunnerKind::SlowdownPickup);
        assert_eq!(RunnerKind::from_roll(0.30), RunnerKind::NukePickup);
        assert_eq!(RunnerKind::from_roll(0.35), RunnerKind::Hazard);
    }

    #[test]
    fn test_roll_distribution_matches_bucket_widths() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut counts = [0u32; 5];
        let n = 100_000;
        for _ in 0..n {
            let kind = RunnerKind::from_roll(rng.f32());
            let idx = RunnerKind::ALL.iter().position(|k| *k == kind).unwrap();
            counts[idx] += 1;
        }
        let expected = [0.65, 0.10, 0.15, 0.05, 0.05];
        for (count, p) in counts.iter().zip(expected) {
            let observed = *count as f32 / n as f32;
            assert!((observed - p).abs() < 0.01, "{observed} vs {p}");
        }
    }

    #[test]
    fn test_every_kind_has_a_profile() {
        for kind in RunnerKind::ALL {
            let profile = kind.profile();
            let expected = if kind.is_hazard() {
                TriggerTag::Hazard
            } else {
                TriggerTag::Pickup
            };
            assert_eq!(profile.trigger, expected);
        }
    }
}
