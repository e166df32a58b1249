use bevy_ecs::prelude::Component;

/// Render switch. Entities without this component are always drawn.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visible(pub bool);
