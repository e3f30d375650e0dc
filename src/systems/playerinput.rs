//! Input half of the player state machine.
//!
//! Reads [`InputState`] and turns it into movement intent, facing, timer
//! activations and tool/seed switching. While the tool-use timer runs or the
//! player sleeps, movement and actions are locked and intent stays zero.
//! Interaction with the trader or the bed is always available.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::Bounds;
use crate::components::interactable::Interactable;
use crate::components::player::{Facing, Player};
use crate::components::timer::ActionTimers;
use crate::events::interaction::ShopToggleEvent;
use crate::resources::input::InputState;

pub fn player_input(
    mut players: Query<(&mut Player, &mut ActionTimers, &mut Animation, &Bounds)>,
    interactables: Query<(&Interactable, &Bounds), Without<Player>>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    for (mut player, mut timers, mut animation, bounds) in players.iter_mut() {
        if !timers.tool_use.is_active() && !player.sleeping {
            // Vertical first; on a diagonal the horizontal key decides facing.
            if input.up.active {
                player.direction.y = -1.0;
                player.facing = Facing::Up;
            } else if input.down.active {
                player.direction.y = 1.0;
                player.facing = Facing::Down;
            } else {
                player.direction.y = 0.0;
            }

            if input.left.active {
                player.direction.x = -1.0;
                player.facing = Facing::Left;
            } else if input.right.active {
                player.direction.x = 1.0;
                player.facing = Facing::Right;
            } else {
                player.direction.x = 0.0;
            }

            if input.use_tool.active {
                timers.tool_use.activate();
                player.direction = Vector2::zero();
                animation.reset();
            }

            if input.switch_tool.active && !timers.tool_switch.is_active() {
                timers.tool_switch.activate();
                player.cycle_tool();
            }

            if input.use_seed.active {
                timers.seed_use.activate();
                player.direction = Vector2::zero();
                animation.reset();
            }

            if input.switch_seed.active && !timers.seed_switch.is_active() {
                timers.seed_switch.activate();
                player.cycle_seed();
            }
        } else {
            player.direction = Vector2::zero();
        }

        if input.interact.just_pressed {
            let touching = interactables
                .iter()
                .find(|(_, zone)| zone.aabb.overlaps(&bounds.aabb));
            match touching {
                Some((Interactable::Trader, _)) => {
                    info!("trader reached, toggling shop");
                    commands.trigger(ShopToggleEvent {});
                }
                Some((Interactable::Bed, _)) => player.fall_asleep(),
                None => {}
            }
        }
    }
}
