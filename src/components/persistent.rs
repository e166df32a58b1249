//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive scene cleanup. Observers,
//! registered systems and the collision rule table are marked this way so a
//! restart only rebuilds the play field.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
