//! Collision detection and the collision rule observer.
//!
//! [`collision_detector`] tests every pair of tagged hitboxes and triggers a
//! [`CollisionEvent`] only on the frame a pair starts overlapping. Pairs that
//! keep overlapping, or that share a tag, never produce an event.
//!
//! [`collision_observer`] resolves the event against the
//! [`CollisionRule`] entities and applies the rule's effect to the runner
//! side of the contact.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionEffect, CollisionRule, TriggerTag};
use crate::components::mapposition::MapPosition;
use crate::components::runner::{Runner, RunnerKind};
use crate::components::scale::Scale;
use crate::events::collision::CollisionEvent;
use crate::events::gameplay::FreezePlayerEvent;
use crate::resources::contacts::ActiveContacts;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::playerstate::{HAZARD_SCORE, PlayerState};
use crate::systems::runners::{destroy_runner, register_miss};

/// Emit a [`CollisionEvent`] for every pair of hitboxes that began to overlap
/// since the previous pass.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, &TriggerTag)>,
    mut contacts: ResMut<ActiveContacts>,
    mut commands: Commands,
) {
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for [(entity_a, position_a, collider_a, tag_a), (entity_b, position_b, collider_b, tag_b)] in
        query.iter_combinations()
    {
        if tag_a == tag_b {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            current.insert(ActiveContacts::key(entity_a, entity_b));
        }
    }

    for &(a, b) in current.iter() {
        if !contacts.pairs.contains(&(a, b)) {
            trace!("Contact began between {:?} and {:?}", a, b);
            commands.trigger(CollisionEvent { a, b });
        }
    }
    contacts.pairs = current;
}

/// Apply the collision rule matching a begin contact.
///
/// Contacts are ignored outside [`GameStates::Playing`] and once the runner
/// involved is already being destroyed, so each runner takes effect at most
/// once.
#[allow(clippy::too_many_arguments)]
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    rules: Query<&CollisionRule>,
    tags: Query<&TriggerTag>,
    mut runners: Query<(&mut Runner, Option<&Scale>)>,
    game_state: Res<GameState>,
    mut player_state: ResMut<PlayerState>,
    config: Res<GameConfig>,
) {
    if game_state.get() != GameStates::Playing {
        return;
    }
    let CollisionEvent { a, b } = *trigger.event();
    let (Ok(tag_a), Ok(tag_b)) = (tags.get(a), tags.get(b)) else {
        return;
    };
    let Some((rule, swapped)) = rules
        .iter()
        .find_map(|rule| rule.matches(*tag_a, *tag_b).map(|swapped| (rule, swapped)))
    else {
        return;
    };
    let runner_entity = if swapped { a } else { b };
    let Ok((mut runner, scale)) = runners.get_mut(runner_entity) else {
        return;
    };
    if runner.destroying {
        return;
    }
    debug!("{:?} with {:?}", rule.effect, runner.kind);

    match rule.effect {
        CollisionEffect::KillHazard => {
            player_state.score += HAZARD_SCORE;
        }
        CollisionEffect::MissHazard => {
            register_miss(&mut commands, &mut player_state);
        }
        CollisionEffect::GrabPickup => match runner.kind {
            RunnerKind::OilFreeze => commands.trigger(FreezePlayerEvent {}),
            RunnerKind::FuelPickup => player_state.fuel.increase(config.fuel_pickup_amount),
            RunnerKind::SlowdownPickup => player_state.slowdown_charges.increase(1),
            RunnerKind::NukePickup => player_state.nuke_charges.increase(1),
            RunnerKind::Hazard => {}
        },
        CollisionEffect::DropPickup => {}
    }
    destroy_runner(&mut commands, runner_entity, &mut runner, scale);
}
