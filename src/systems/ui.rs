//! HUD projection.
//!
//! [`update_ui`] copies the [`PlayerState`] counters onto the HUD entities
//! every frame: the soap meter scale, the score label, and which counter
//! icons are shown.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::scale::Scale;
use crate::components::ui::{CounterIcon, CounterKind, ScoreText, SoapMeter};
use crate::components::visible::Visible;
use crate::resources::playerstate::PlayerState;

/// Most people icons drawn at once.
pub const MAX_PEOPLE_ICONS: usize = 500;
/// People icons per row before wrapping.
pub const PEOPLE_ICONS_PER_ROW: usize = 40;

/// Number of people icons for a population.
///
/// The count grows as `population^2.5`, so the crowd only visibly thins out
/// when very few people are left.
pub fn people_icon_count(population: i32) -> usize {
    if population <= 0 {
        return 0;
    }
    let count = (population as f64).powf(2.5);
    if count >= MAX_PEOPLE_ICONS as f64 {
        MAX_PEOPLE_ICONS
    } else {
        count as usize
    }
}

pub fn score_label(score: i32) -> String {
    format!("Score: {}", score)
}

pub fn update_ui(
    player_state: Res<PlayerState>,
    mut meters: Query<&mut Scale, With<SoapMeter>>,
    mut scores: Query<&mut DynamicText, With<ScoreText>>,
    mut icons: Query<(&CounterIcon, &mut Visible)>,
) {
    let fill = player_state.fuel.fraction_of_max();
    for mut scale in meters.iter_mut() {
        scale.scale.x = fill;
    }

    let label = score_label(player_state.score);
    for mut text in scores.iter_mut() {
        text.set_content(&label);
    }

    let shown = |kind: CounterKind| -> usize {
        match kind {
            CounterKind::Slowdown => player_state.slowdown_charges.value().max(0) as usize,
            CounterKind::Nuke => player_state.nuke_charges.value().max(0) as usize,
            CounterKind::Population => people_icon_count(player_state.population.value()),
        }
    };
    for (icon, mut visible) in icons.iter_mut() {
        let show = icon.index < shown(icon.counter);
        if visible.0 != show {
            visible.0 = show;
        }
    }
}
