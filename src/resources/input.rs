//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the farmer cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use the arrow keys for
//! movement, space/Q for tools, left control/W for seeds and enter to interact.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Record a held/not-held sample and derive the edges from the previous one.
    pub fn sample(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub use_tool: BoolState,
    pub switch_tool: BoolState,
    pub use_seed: BoolState,
    pub switch_seed: BoolState,
    pub interact: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_UP),
            down: BoolState::bound(KeyboardKey::KEY_DOWN),
            left: BoolState::bound(KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            use_tool: BoolState::bound(KeyboardKey::KEY_SPACE),
            switch_tool: BoolState::bound(KeyboardKey::KEY_Q),
            use_seed: BoolState::bound(KeyboardKey::KEY_LEFT_CONTROL),
            switch_seed: BoolState::bound(KeyboardKey::KEY_W),
            interact: BoolState::bound(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Every binding, for systems that poll hardware generically.
    pub fn all_mut(&mut self) -> [&mut BoolState; 10] {
        [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.use_tool,
            &mut self.switch_tool,
            &mut self.use_seed,
            &mut self.switch_seed,
            &mut self.interact,
            &mut self.mode_debug,
        ]
    }
}
