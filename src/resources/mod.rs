//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`animationstore`] – registry of sprite-sheet animations
//! - [`camera2d`] – the shared 2D camera
//! - [`camerashake`] – remaining camera shake frames
//! - [`contacts`] – overlapping pairs of the previous collision pass
//! - [`debugmode`] – presence toggles the debug overlay
//! - [`difficulty`] – speed modifier and slowdown level of the spawner
//! - [`fontstore`] – loaded fonts (non-send)
//! - [`gameconfig`] – INI-backed configuration
//! - [`gamestate`] – current and requested high-level state
//! - [`input`] – key bindings and the per-frame input queue
//! - [`playerstate`] – counters and score of the current run
//! - [`rng`] – seedable gameplay RNG
//! - [`screensize`] – framebuffer size
//! - [`systemsstore`] – state hooks by name
//! - [`texturestore`] – loaded textures
//! - [`worldtime`] – frame clock

pub mod animationstore;
pub mod camera2d;
pub mod camerashake;
pub mod contacts;
pub mod debugmode;
pub mod difficulty;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod playerstate;
pub mod rng;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
