use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback cursor for the player's status-keyed animation.
///
/// `frame_index` accumulates continuously; switching status does not reset
/// it, so a shorter sequence may wrap early.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub frame_index: f32,
    /// Frames advanced per second.
    pub fps: f32,
}

impl Animation {
    pub fn new(fps: f32) -> Self {
        Self {
            frame_index: 0.0,
            fps,
        }
    }

    /// Advance by `dt` seconds, looping back to 0 once past `frame_count`.
    pub fn advance(&mut self, dt: f32, frame_count: usize) {
        self.frame_index += self.fps * dt;
        if self.frame_index >= frame_count as f32 {
            self.frame_index = 0.0;
        }
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        self.frame_index.floor() as usize
    }

    pub fn reset(&mut self) {
        self.frame_index = 0.0;
    }
}
