//! Applies the player's [`FarmCmd`] requests to the [`SoilPatches`] grid.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::farming::FarmCmd;
use crate::resources::soil::SoilPatches;

pub fn apply_farm_cmds(mut reader: MessageReader<FarmCmd>, mut soil: ResMut<SoilPatches>) {
    for cmd in reader.read() {
        let changed = match *cmd {
            FarmCmd::Till { at } => soil.till(at),
            FarmCmd::Water { at } => soil.water(at),
            FarmCmd::Plant { at, seed } => soil.plant(at, seed),
        };
        debug!("{:?} -> {}", cmd, if changed { "applied" } else { "ignored" });
    }
}

/// Advance the `FarmCmd` queue once per frame.
pub fn update_farm_cmds(mut msgs: ResMut<Messages<FarmCmd>>) {
    msgs.update();
}
