//! Game systems and the observers that belong to them.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-sheet animations
//! - [`collision`] – begin-contact detection and the collision rule observer
//! - [`effects`] – screen flash and camera shake
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – poll raylib into the [`crate::resources::input::InputQueue`]
//! - [`lifecycle`] – soap consumption and the loss check
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`player`] – apply queued input, freeze the soap
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`runners`] – spawn, slow, nuke and destroy falling runners
//! - [`time`] – update simulation time and delta
//! - [`timer`] – advance timers and emit their events
//! - [`ttl`] – despawn entities whose time ran out
//! - [`tween`] – animate position, scale and tint over time
//! - [`ui`] – project the player state onto the HUD

pub mod animation;
pub mod collision;
pub mod effects;
pub mod gamestate;
pub mod input;
pub mod lifecycle;
pub mod movement;
pub mod player;
pub mod render;
pub mod runners;
pub mod time;
pub mod timer;
pub mod ttl;
pub mod tween;
pub mod ui;
