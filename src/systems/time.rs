//! Time update and action timers.
//!
//! - [`update_world_time`] advances the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame.
//! - [`update_action_timers`] ticks every player's [`ActionTimers`] and
//!   applies the effects of the timers that finished, inside the same system
//!   run, before movement.
use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::boxcollider::Bounds;
use crate::components::interactable::Tree;
use crate::components::inventory::Inventory;
use crate::components::player::{Player, Tool};
use crate::components::timer::{ActionEffect, ActionTimers};
use crate::events::audio::{AudioCmd, WATER_FX};
use crate::events::farming::FarmCmd;
use crate::events::interaction::TreeHitEvent;
use crate::resources::worldtime::WorldTime;

/// Advance the shared [`WorldTime`] by one frame of `dt` unscaled seconds.
///
/// Called by the host before running the player schedule.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}

/// Tick the four action timers and run the tool/seed effects that fire.
pub fn update_action_timers(
    mut players: Query<(Entity, &mut ActionTimers, &mut Inventory, &Player)>,
    trees: Query<(Entity, &Bounds), With<Tree>>,
    time: Res<WorldTime>,
    mut farm: MessageWriter<FarmCmd>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    for (entity, mut timers, mut inventory, player) in players.iter_mut() {
        for effect in timers.update(time.delta) {
            match effect {
                ActionEffect::UseTool => {
                    use_tool(entity, player, &trees, &mut farm, &mut audio, &mut commands)
                }
                ActionEffect::UseSeed => use_seed(player, &mut inventory, &mut farm),
            }
        }
    }
}

fn use_tool(
    by: Entity,
    player: &Player,
    trees: &Query<(Entity, &Bounds), With<Tree>>,
    farm: &mut MessageWriter<FarmCmd>,
    audio: &mut MessageWriter<AudioCmd>,
    commands: &mut Commands,
) {
    let at = player.target;
    let tool = player.selected_tool();
    debug!("using {} at ({:.1}, {:.1})", tool.as_str(), at.x, at.y);
    match tool {
        Tool::Hoe => {
            farm.write(FarmCmd::Till { at });
        }
        Tool::Axe => {
            if let Some((tree, _)) = trees.iter().find(|(_, b)| b.aabb.contains_point(at)) {
                trace!("axe hit tree {:?}", tree);
                commands.trigger(TreeHitEvent { tree, by });
            }
        }
        Tool::Water => {
            audio.write(AudioCmd::PlayFx {
                id: WATER_FX.to_string(),
            });
            farm.write(FarmCmd::Water { at });
        }
    }
}

fn use_seed(player: &Player, inventory: &mut Inventory, farm: &mut MessageWriter<FarmCmd>) {
    let seed = player.selected_seed();
    if inventory.take_seed(seed) {
        debug!(
            "planting {} at ({:.1}, {:.1}), {} left",
            seed.as_str(),
            player.target.x,
            player.target.y,
            inventory.seed_count(seed)
        );
        farm.write(FarmCmd::Plant {
            at: player.target,
            seed,
        });
    } else {
        trace!("no {} seeds left", seed.as_str());
    }
}
