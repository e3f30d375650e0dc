//! Fieldhand library.
//!
//! This module exposes the farmer's ECS components, resources, systems, and
//! events for use in integration tests and by the demo binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
