//! Status derivation.
//!
//! Runs after input each tick and recomputes the activity half of the
//! player's status from its movement intent and the tool-use timer. Facing is
//! left as input set it.
use bevy_ecs::prelude::*;

use crate::components::player::{Activity, Player};
use crate::components::timer::ActionTimers;

pub fn player_status(mut players: Query<(&mut Player, &ActionTimers)>) {
    for (mut player, timers) in players.iter_mut() {
        let tool_in_use = timers.tool_use.is_active().then(|| player.selected_tool());
        let activity = Activity::derive(player.direction, tool_in_use);
        if player.activity != activity {
            player.activity = activity;
        }
    }
}
