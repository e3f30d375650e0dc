//! Game systems.
//!
//! This module groups all ECS systems that advance the player simulation,
//! input, audio and rendering.
//!
//! Submodules overview
//! - [`animation`] – advance the player's animation cursor for its status
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`collision`] – per-axis push-out of a hitbox against obstacles
//! - [`farming`] – apply farm commands to the soil grid
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate movement intent and track the tool target
//! - [`playerinput`] – turn input into intent, facing, timers and interactions
//! - [`render`] – draw the farm, the player, the HUD and debug overlays using Raylib
//! - [`status`] – derive the player's activity from intent and tool use
//! - [`time`] – update simulation time, tick action timers and apply their effects

pub mod animation;
pub mod audio;
pub mod collision;
pub mod farming;
pub mod input;
pub mod movement;
pub mod playerinput;
pub mod render;
pub mod status;
pub mod time;
