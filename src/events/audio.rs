//! Audio messages exchanged with the background audio thread.
//!
//! Gameplay systems write [`AudioCmd`] into `Messages<AudioCmd>`; the host
//! forwards them to the thread started by
//! [`setup_audio`](crate::resources::audio::setup_audio). Replies come back
//! as [`AudioMessage`].
use bevy_ecs::message::Message;

/// Sound id played when the watering can is used.
pub const WATER_FX: &str = "water";

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    VolumeFx { id: String, vol: f32 },
    UnloadFx { id: String },
    UnloadAllFx,
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxUnloaded { id: String },
    FxUnloadedAll,
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
}
