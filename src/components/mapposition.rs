use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Authoritative world position with sub-pixel precision.
///
/// For the player this is the centre of its hitbox before rounding; the
/// collider and visual rect follow it, and collisions write back into it.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
        }
    }
}
