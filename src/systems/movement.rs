//! Player movement integration and target tracking.
//!
//! [`player_movement`] normalizes the intent so diagonal speed equals axial
//! speed, then moves horizontally and vertically in that order. After each
//! axis the hitbox is snapped to the rounded position, the visual rect is
//! re-centred on it and [`resolve_axis`] pushes it out of obstacles, including
//! any it skipped over since the pre-step hitbox.
//!
//! [`player_target`] keeps the tool target one offset ahead of the player in
//! its facing direction.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::{Aabb, BoxCollider, Bounds, Obstacle};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{Axis, resolve_axis};

/// Recompute each player's target point from its visual rect and facing.
pub fn player_target(mut players: Query<(&mut Player, &Bounds)>) {
    for (mut player, bounds) in players.iter_mut() {
        let target = bounds.aabb.center() + player.facing.tool_offset();
        player.target = target;
    }
}

/// Integrate movement intent into position, resolving collisions per axis.
pub fn player_movement(
    mut players: Query<(&mut Player, &mut MapPosition, &mut BoxCollider, &mut Bounds)>,
    obstacles: Query<&BoxCollider, (With<Obstacle>, Without<Player>)>,
    time: Res<WorldTime>,
) {
    let solids: Vec<Aabb> = obstacles.iter().map(|c| c.aabb).collect();

    for (mut player, mut position, mut collider, mut bounds) in players.iter_mut() {
        if player.direction.length() > 0.0 {
            player.direction = player.direction.normalized();
        }
        let step = player.speed * time.delta;
        let direction = player.direction;

        // Horizontal
        let before = collider.aabb;
        position.pos.x += direction.x * step;
        collider.aabb.set_center_x(position.pos.x.round_ties_even());
        bounds.aabb.set_center_x(collider.aabb.center().x);
        if resolve_axis(&mut collider.aabb, &before, Axis::Horizontal, direction.x, &solids) {
            let cx = collider.aabb.center().x;
            bounds.aabb.set_center_x(cx);
            position.pos.x = cx;
        }

        // Vertical
        let before = collider.aabb;
        position.pos.y += direction.y * step;
        collider.aabb.set_center_y(position.pos.y.round_ties_even());
        bounds.aabb.set_center_y(collider.aabb.center().y);
        if resolve_axis(&mut collider.aabb, &before, Axis::Vertical, direction.y, &solids) {
            let cy = collider.aabb.center().y;
            bounds.aabb.set_center_y(cy);
            position.pos.y = cy;
        }
    }
}
