//! Channels between the ECS world and the audio thread.
//!
//! [`setup_audio`] spawns the thread once at startup and registers the
//! [`AudioBridge`] plus both message queues. [`shutdown_audio`] asks the
//! thread to stop and waits for it.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;

#[derive(Resource)]
pub struct AudioBridge {
    /// ECS -> audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Audio thread -> ECS.
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: std::thread::JoinHandle<()>,
}

pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Stop the audio thread. Safe to call when audio was never set up.
pub fn shutdown_audio(world: &mut World) {
    let Some(bridge) = world.remove_resource::<AudioBridge>() else {
        return;
    };
    let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
    if bridge.handle.join().is_err() {
        warn!("[audio] thread panicked before shutdown");
    }
}
