//! Collision trigger tags and the rule table.
//!
//! Every collidable entity carries a [`TriggerTag`] naming its role. The rule
//! table is a set of [`CollisionRule`] entities, each binding an unordered
//! pair of tags to a [`CollisionEffect`]. The
//! [`collision_observer`](crate::systems::collision::collision_observer)
//! looks up the rule for each begin contact and applies its effect.

use bevy_ecs::prelude::*;

/// Role of a hitbox in the collision rule table.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerTag {
    /// The line under the player that catches missed runners.
    Border,
    /// The soap bar.
    Player,
    /// A falling virus.
    Hazard,
    /// Any falling item the player can collect.
    Pickup,
}

/// Gameplay consequence of a begin contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEffect {
    /// The player hit a hazard: score and destroy it.
    KillHazard,
    /// A hazard reached the border: lose one person and flash the screen.
    MissHazard,
    /// The player caught a pickup: apply it and destroy it.
    GrabPickup,
    /// A pickup reached the border: destroy it without effect.
    DropPickup,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct CollisionRule {
    pub tag_a: TriggerTag,
    pub tag_b: TriggerTag,
    pub effect: CollisionEffect,
}

impl CollisionRule {
    pub fn new(tag_a: TriggerTag, tag_b: TriggerTag, effect: CollisionEffect) -> Self {
        Self {
            tag_a,
            tag_b,
            effect,
        }
    }

    /// Match a contact against this rule regardless of order.
    ///
    /// Returns `Some(false)` when `(a, b)` matches `(tag_a, tag_b)` as given,
    /// `Some(true)` when it matches swapped, `None` otherwise.
    pub fn matches(&self, a: TriggerTag, b: TriggerTag) -> Option<bool> {
        if self.tag_a == a && self.tag_b == b {
            Some(false)
        } else if self.tag_a == b && self.tag_b == a {
            Some(true)
        } else {
            None
        }
    }
}

/// The rules of the game. The runner side of every rule is `tag_b`.
pub fn gameplay_rules() -> [CollisionRule; 4] {
    use CollisionEffect::*;
    use TriggerTag::*;
    [
        CollisionRule::new(Player, Hazard, KillHazard),
        CollisionRule::new(Border, Hazard, MissHazard),
        CollisionRule::new(Player, Pickup, GrabPickup),
        CollisionRule::new(Border, Pickup, DropPickup),
    ]
}
