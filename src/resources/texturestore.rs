//! Loaded character textures keyed by frame path.
//!
//! GPU handles are not `Send`, so this lives in the world as a non-send
//! resource next to the raylib handle.
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::resources::animationstore::AnimationStore;

pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load every frame referenced by `store`. Frames that fail to load are
    /// skipped and the renderer falls back to a plain rectangle.
    pub fn load_frames(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, store: &AnimationStore) {
        for frames in store.sequences.values() {
            for frame in frames {
                if self.textures.contains_key(frame.as_ref()) {
                    continue;
                }
                match rl.load_texture(thread, frame) {
                    Ok(texture) => {
                        self.textures.insert(frame.to_string(), texture);
                    }
                    Err(e) => log::warn!("failed to load frame {}: {}", frame, e),
                }
            }
        }
        log::info!("loaded {} character textures", self.textures.len());
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
