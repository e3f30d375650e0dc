//! World objects the player can interact with or chop.
use bevy_ecs::prelude::Component;

/// Something the player can use with the confirm key while overlapping its
/// [`Bounds`](crate::components::boxcollider::Bounds).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactable {
    /// Opens or closes the shop.
    Trader,
    /// Puts the player to sleep.
    Bed,
}

impl Interactable {
    /// Map object names as they appear in level data.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Trader" => Some(Interactable::Trader),
            "Bed" => Some(Interactable::Bed),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Interactable::Trader => "Trader",
            Interactable::Bed => "Bed",
        }
    }
}

/// A tree that can be hit with the axe.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tree {
    pub health: i32,
}

impl Tree {
    pub fn new(health: i32) -> Self {
        Self { health }
    }

    pub fn damage(&mut self) {
        self.health -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
