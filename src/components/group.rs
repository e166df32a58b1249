//! Scene grouping tag.
//!
//! Every entity spawned for a play field carries a [`Group`]. Cleaning the
//! scene despawns all grouped entities that are not
//! [`Persistent`](super::persistent::Persistent).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
