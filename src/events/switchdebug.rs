//! Debug overlay toggle.
//!
//! Triggered on the press edge of the debug key. The observer flips the
//! presence of [`DebugMode`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    debug_mode: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("debug overlay off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("debug overlay on");
        }
    }
}
