//! Animation resource registry.
//!
//! Frame sequences for every player [`Status`] are pulled once from a
//! [`FrameSource`] and kept here. The animation system only needs the length
//! of the active sequence; renderers resolve the current frame key.
//!
//! Two sources ship with the crate:
//! - [`FolderFrameSource`] – one folder per status label holding image files
//! - [`ManifestFrameSource`] – a JSON object mapping labels to frame lists

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::player::Status;

/// Ordered frame keys of one sequence (texture paths in practice).
pub type FrameSeq = SmallVec<[Arc<str>; 4]>;

/// Provides the frame list for a status label such as `"down_idle"`.
pub trait FrameSource {
    fn frames(&self, label: &str) -> Vec<String>;
}

/// Central registry of player animation sequences keyed by status.
#[derive(Resource, Default, Debug, Clone)]
pub struct AnimationStore {
    pub sequences: FxHashMap<Status, FrameSeq>,
}

impl AnimationStore {
    /// Query `source` for every status. Statuses without frames get an empty
    /// sequence.
    pub fn load(source: &dyn FrameSource) -> Self {
        let mut sequences = FxHashMap::default();
        for status in Status::all() {
            let label = status.label();
            let frames: FrameSeq = source
                .frames(&label)
                .into_iter()
                .map(|f| Arc::<str>::from(f))
                .collect();
            debug!("animation '{}' has {} frames", label, frames.len());
            sequences.insert(status, frames);
        }
        Self { sequences }
    }

    pub fn frame_count(&self, status: &Status) -> usize {
        self.sequences.get(status).map_or(0, |s| s.len())
    }

    pub fn frame(&self, status: &Status, index: usize) -> Option<&Arc<str>> {
        self.sequences.get(status).and_then(|s| s.get(index))
    }
}

/// Reads `<root>/<label>/*` and returns the image files in name order.
pub struct FolderFrameSource {
    pub root: PathBuf,
}

impl FolderFrameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn is_image(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("png") | Some("PNG")
        )
    }
}

impl FrameSource for FolderFrameSource {
    fn frames(&self, label: &str) -> Vec<String> {
        let dir = self.root.join(label);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("animation folder {:?} not readable: {}", dir, e);
                return Vec::new();
            }
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| Self::is_image(p))
            .collect();
        files.sort();
        files
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }
}

/// Frames listed in a JSON manifest: `{"down_idle": ["a.png", "b.png"], ...}`.
pub struct ManifestFrameSource {
    entries: FxHashMap<String, Vec<String>>,
}

impl ManifestFrameSource {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: FxHashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse animation manifest: {}", e))?;
        Ok(Self { entries })
    }
}

impl FrameSource for ManifestFrameSource {
    fn frames(&self, label: &str) -> Vec<String> {
        self.entries.get(label).cloned().unwrap_or_default()
    }
}
