//! Sound effects on a dedicated thread.
//!
//! Raylib's audio device and every [`Sound`] stay on the thread started by
//! [`crate::resources::audio::setup_audio`]. The ECS side only exchanges
//! messages with it:
//! - [`forward_audio_cmds`] pushes this frame's [`AudioCmd`]s down the channel
//! - [`poll_audio_messages`] drains [`AudioMessage`] replies into the ECS
//! - [`update_bevy_audio_cmds`] / [`update_bevy_audio_messages`] advance both
//!   message queues once per frame
//!
//! Only one-shot effects exist here; the watering can is the sole user.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;

/// Drain any pending replies from the audio thread into
/// [`Messages<AudioMessage>`]. Never blocks.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Run after [`poll_audio_messages`] so replies become readable this frame.
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Send every [`AudioCmd`] written since the last run to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // the thread may already be gone during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Loaded effects and the ids currently sounding.
struct FxBank<'aud> {
    audio: &'aud RaylibAudio,
    sounds: FxHashMap<String, Sound<'aud>>,
    playing: FxHashSet<String>,
    tx: Sender<AudioMessage>,
}

impl<'aud> FxBank<'aud> {
    fn reply(&self, msg: AudioMessage) {
        let _ = self.tx.send(msg);
    }

    /// Apply one command. Returns false once shutdown was requested.
    fn handle(&mut self, cmd: AudioCmd) -> bool {
        match cmd {
            AudioCmd::LoadFx { id, path } => match self.audio.new_sound(&path) {
                Ok(sound) => {
                    info!("[audio] fx loaded id='{}' path='{}'", id, path);
                    self.sounds.insert(id.clone(), sound);
                    self.reply(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    warn!("[audio] fx load failed id='{}' path='{}' error='{}'", id, path, e);
                    self.reply(AudioMessage::FxLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => match self.sounds.get(&id) {
                Some(sound) => {
                    debug!("[audio] fx play id='{}'", id);
                    sound.play();
                    self.playing.insert(id);
                }
                None => warn!("[audio] fx play failed id='{}' reason='not loaded'", id),
            },
            AudioCmd::VolumeFx { id, vol } => {
                if let Some(sound) = self.sounds.get(&id) {
                    debug!("[audio] fx volume id='{}' vol={}", id, vol);
                    sound.set_volume(vol);
                }
            }
            AudioCmd::UnloadFx { id } => {
                if self.sounds.remove(&id).is_some() {
                    debug!("[audio] fx unload id='{}'", id);
                    self.playing.remove(&id);
                    self.reply(AudioMessage::FxUnloaded { id });
                }
            }
            AudioCmd::UnloadAllFx => self.clear(),
            AudioCmd::Shutdown => {
                info!("[audio] shutdown requested");
                self.clear();
                return false;
            }
        }
        true
    }

    fn clear(&mut self) {
        self.sounds.clear();
        self.playing.clear();
        self.reply(AudioMessage::FxUnloadedAll);
    }

    /// Report effects that stopped since the last pass, once each.
    fn reap_finished(&mut self) {
        let finished: Vec<String> = self
            .playing
            .iter()
            .filter(|id| !self.sounds.get(*id).is_some_and(|s| s.is_playing()))
            .cloned()
            .collect();
        for id in finished {
            debug!("[audio] fx finished id='{}'", id);
            self.playing.remove(&id);
            self.reply(AudioMessage::FxFinished { id });
        }
    }
}

/// Body of the audio thread. Blocks until [`AudioCmd::Shutdown`].
///
/// If no audio device can be opened the thread keeps consuming commands
/// without playing anything, so senders never pile up.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            for cmd in rx_cmd.iter() {
                if cmd == AudioCmd::Shutdown {
                    break;
                }
            }
            return;
        }
    };
    info!("[audio] thread starting (id={:?})", std::thread::current().id());

    let mut bank = FxBank {
        audio: &audio,
        sounds: FxHashMap::default(),
        playing: FxHashSet::default(),
        tx: tx_msg,
    };

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            if !bank.handle(cmd) {
                break 'run;
            }
        }
        bank.reap_finished();
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    // sounds must drop before the device
    drop(bank);
    info!("[audio] thread exiting (id={:?})", std::thread::current().id());
}
