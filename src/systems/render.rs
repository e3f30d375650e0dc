//! Rendering.
//!
//! [`render_system`] opens raylib's drawing scope once per frame and draws,
//! back to front: soil tiles, obstacles, trees, interactable zones, the
//! player's current animation frame and the HUD. With [`DebugMode`] present
//! it also outlines every hitbox and marks the player's tool target.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::{Aabb, BoxCollider, Bounds, Obstacle};
use crate::components::interactable::{Interactable, Tree};
use crate::components::inventory::{Inventory, Item};
use crate::components::player::{Player, SEEDS};
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugmode::DebugMode;
use crate::resources::soil::SoilPatches;
use crate::resources::texturestore::TextureStore;

const GRASS: Color = Color::new(90, 140, 70, 255);
const TILLED: Color = Color::new(110, 80, 50, 255);
const WATERED: Color = Color::new(70, 50, 35, 255);

fn fill(d: &mut RaylibDrawHandle, aabb: &Aabb, color: Color) {
    d.draw_rectangle_rec(aabb.to_rectangle(), color);
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    animations: Res<AnimationStore>,
    soil: Res<SoilPatches>,
    players: Query<(&Player, &Bounds, &BoxCollider, &Animation, &Inventory)>,
    obstacles: Query<&BoxCollider, (With<Obstacle>, Without<Player>, Without<Tree>)>,
    trees: Query<(&Tree, &Bounds)>,
    interactables: Query<(&Interactable, &Bounds)>,
    debug: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(GRASS);

    let tile = soil.tile_size;
    for (&(cx, cy), state) in soil.iter() {
        let color = if state.watered { WATERED } else { TILLED };
        let aabb = Aabb::new(cx as f32 * tile, cy as f32 * tile, tile, tile);
        fill(&mut d, &aabb, color);
        if let Some(seed) = state.plant {
            let c = aabb.center();
            d.draw_circle_v(c, tile * 0.2, Color::LIME);
            d.draw_text(seed.as_str(), aabb.x as i32 + 4, aabb.y as i32 + 4, 10, Color::WHITE);
        }
    }

    for collider in obstacles.iter() {
        fill(&mut d, &collider.aabb, Color::DARKGRAY);
    }

    for (tree, bounds) in trees.iter() {
        let color = if tree.is_alive() { Color::DARKGREEN } else { Color::BROWN };
        fill(&mut d, &bounds.aabb, color);
    }

    for (kind, bounds) in interactables.iter() {
        d.draw_rectangle_lines_ex(bounds.aabb.to_rectangle(), 2.0, Color::GOLD);
        d.draw_text(kind.name(), bounds.aabb.x as i32 + 4, bounds.aabb.y as i32 + 4, 16, Color::GOLD);
    }

    for (player, bounds, _, animation, _) in players.iter() {
        let status = player.status();
        let frame = animations.frame(&status, animation.frame());
        match frame.and_then(|key| textures.get(key)) {
            Some(tex) => d.draw_texture(tex, bounds.aabb.x as i32, bounds.aabb.y as i32, Color::WHITE),
            None => {
                fill(&mut d, &bounds.aabb, Color::BEIGE);
                d.draw_text(&status.label(), bounds.aabb.x as i32, bounds.aabb.y as i32 - 14, 12, Color::BLACK);
            }
        }
        if player.sleeping {
            d.draw_text("Zzz", bounds.aabb.right() as i32, bounds.aabb.y as i32, 20, Color::WHITE);
        }
    }

    let screen_h = d.get_screen_height();
    if let Some((player, _, _, _, inventory)) = players.iter().next() {
        let hud = format!(
            "tool: {}  seed: {} ({})",
            player.selected_tool().as_str(),
            player.selected_seed().as_str(),
            inventory.seed_count(player.selected_seed())
        );
        d.draw_text(&hud, 10, screen_h - 50, 20, Color::WHITE);
        let mut stock = format!(
            "wood {}  apple {}  corn {}  tomato {}",
            inventory.item_count(Item::Wood),
            inventory.item_count(Item::Apple),
            inventory.item_count(Item::Corn),
            inventory.item_count(Item::Tomato)
        );
        for seed in SEEDS {
            stock.push_str(&format!("  {} seeds {}", seed.as_str(), inventory.seed_count(seed)));
        }
        stock.push_str(&format!("  money {}", inventory.money));
        d.draw_text(&stock, 10, screen_h - 25, 16, Color::WHITE);
    }

    if debug.is_some() {
        for collider in obstacles.iter() {
            d.draw_rectangle_lines_ex(collider.aabb.to_rectangle(), 1.0, Color::RED);
        }
        for (player, bounds, collider, animation, _) in players.iter() {
            d.draw_rectangle_lines_ex(bounds.aabb.to_rectangle(), 1.0, Color::BLUE);
            d.draw_rectangle_lines_ex(collider.aabb.to_rectangle(), 1.0, Color::RED);
            d.draw_circle_v(player.target, 4.0, Color::MAGENTA);
            let text = format!(
                "{} frame {:.2} dir ({:.2}, {:.2})",
                player.status().label(),
                animation.frame_index,
                player.direction.x,
                player.direction.y
            );
            d.draw_text(&text, 10, 30, 10, Color::BLACK);
        }
        let fps = d.get_fps();
        d.draw_text(&format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps), 10, 10, 10, Color::BLACK);
    }
}
