//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the farm: the player itself, its timers and inventory, and the world
//! objects it walks into or works on.
//!
//! Submodules overview:
//! - [`animation`] – playback cursor for status-keyed animations
//! - [`boxcollider`] – axis-aligned rectangles: hitbox, visual rect, obstacle marker
//! - [`interactable`] – trader/bed zones and choppable trees
//! - [`inventory`] – items, seed counts and money
//! - [`mapposition`] – float world position of the player's centre
//! - [`player`] – facing, activity, selected tool/seed and movement intent
//! - [`timer`] – cooldown timers with deferred action effects

pub mod animation;
pub mod boxcollider;
pub mod interactable;
pub mod inventory;
pub mod mapposition;
pub mod player;
pub mod timer;
