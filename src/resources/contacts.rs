//! Contact bookkeeping for begin-phase collision detection.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Pairs that overlapped on the previous detection pass.
///
/// Pairs are stored with the lower entity first so `(a, b)` and `(b, a)` are
/// the same contact.
#[derive(Resource, Debug, Default)]
pub struct ActiveContacts {
    pub pairs: FxHashSet<(Entity, Entity)>,
}

impl ActiveContacts {
    pub fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
