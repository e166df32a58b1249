//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`collision`] – trigger tags and the collision rule table
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`fill`] – solid rectangle used by screen effects
//! - [`group`] – tag component grouping the entities of a scene
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`player`] – the soap bar and its lane state machine
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`runner`] – falling hazards and pickups
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – countdown timer that emits events when finished
//! - [`tint`] – colour modulation
//! - [`tween`] – animated interpolation of position, scale, and tint
//! - [`ui`] – HUD markers and counter icon layout
//! - [`visible`] – render switch
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod collision;
pub mod dynamictext;
pub mod fill;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod runner;
pub mod scale;
pub mod sprite;
pub mod timer;
pub mod tint;
pub mod tween;
pub mod ui;
pub mod visible;
pub mod zindex;
