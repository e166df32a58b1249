//! Registry of state hooks.
//!
//! Enter hooks are one-shot systems registered with the world at startup and
//! looked up here by [`StateHook`] when a transition is applied. Running them
//! through their [`SystemId`] keeps the state observer decoupled from the
//! parameters each hook needs.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Well-known hooks run on state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateHook {
    /// Load assets, then request [`Playing`](crate::resources::gamestate::GameStates::Playing).
    Setup,
    /// Clean the scene and build a fresh play field.
    EnterPlay,
    /// Kill the player and show the game-over screen.
    EnterGameOver,
    QuitGame,
}

/// Map of hooks to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<StateHook, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Register the system that implements `hook`.
    pub fn insert(&mut self, hook: StateHook, id: SystemId) {
        self.map.insert(hook, id);
    }

    /// Retrieve the system registered for `hook`, if any.
    pub fn get(&self, hook: StateHook) -> Option<SystemId> {
        self.map.get(&hook).copied()
    }
}
