//! Requests from the player to the soil layer.
//!
//! The soil/farming subsystem lives outside this crate's core. The player
//! only writes [`FarmCmd`] messages at its target point; whoever owns the
//! soil grid reads and applies them.
use bevy_ecs::message::Message;
use raylib::prelude::Vector2;

use crate::components::player::Seed;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum FarmCmd {
    /// Hoe the tile under `at`.
    Till { at: Vector2 },
    /// Water the tile under `at`.
    Water { at: Vector2 },
    /// Plant `seed` in the tile under `at`.
    Plant { at: Vector2, seed: Seed },
}
