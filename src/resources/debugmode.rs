//! Debug overlay toggle.
//!
//! While this resource exists the renderer outlines hitboxes and visual
//! rects, marks the tool target and prints the player's status. It is
//! flipped by [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! or inserted at startup with `--debug`.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
