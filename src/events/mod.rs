//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`collision`] – begin-contact notifications from the collision detector
//! - [`gameplay`] – flash, freeze and powerup requests
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – logical key presses queued by the input poller
//! - [`switchdebug`] – toggle debug rendering on/off
//! - [`timer`] – timer expirations
//! - [`tween`] – one-shot tween completions
pub mod collision;
pub mod gameplay;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
pub mod timer;
pub mod tween;
