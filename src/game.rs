//! Player setup, the per-tick player schedule and the demo farm.
//!
//! A host drives the simulation like this:
//!
//! 1. [`insert_player_resources`] and [`register_observers`] once
//! 2. [`spawn_player`] plus whatever obstacles, trees and zones the level has
//! 3. every frame: refresh [`InputState`], call
//!    [`update_world_time`](crate::systems::time::update_world_time), then run
//!    the schedule returned by [`player_schedule`]
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::{Aabb, BoxCollider, Bounds, Obstacle};
use crate::components::interactable::{Interactable, Tree};
use crate::components::inventory::Inventory;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::timer::ActionTimers;
use crate::events::audio::AudioCmd;
use crate::events::farming::FarmCmd;
use crate::events::interaction::observe_tree_hit;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::soil::SoilPatches;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::player_animation;
use crate::systems::movement::{player_movement, player_target};
use crate::systems::playerinput::player_input;
use crate::systems::status::player_status;
use crate::systems::time::update_action_timers;

/// Seconds the player stays in bed before the next day starts.
pub const NIGHT_SECONDS: f32 = 2.0;

const TREE_HEALTH: i32 = 5;

/// Resources every player system reads or writes. Existing ones are kept.
pub fn insert_player_resources(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    world.init_resource::<AnimationStore>();
    world.init_resource::<Messages<FarmCmd>>();
    world.init_resource::<Messages<AudioCmd>>();
}

pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(observe_tree_hit));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Spawn the player with its visual rect centred on `center`.
pub fn spawn_player(world: &mut World, center: Vector2, config: &GameConfig) -> Entity {
    let bounds = Aabb::from_center(center, config.sprite_width, config.sprite_height);
    let hitbox = bounds.inflate(-config.hitbox_inset_x, -config.hitbox_inset_y);

    let mut player = Player::new(config.player_speed);
    player.target = bounds.center() + player.facing.tool_offset();

    let entity = world
        .spawn((
            player,
            MapPosition::new(center.x, center.y),
            BoxCollider::new(hitbox),
            Bounds::new(bounds),
            ActionTimers::new(
                config.tool_use_ms,
                config.tool_switch_ms,
                config.seed_use_ms,
                config.seed_switch_ms,
            ),
            Inventory::default(),
            Animation::new(config.animation_fps),
        ))
        .id();
    info!("player spawned at ({:.1}, {:.1})", center.x, center.y);
    entity
}

pub fn spawn_obstacle(world: &mut World, aabb: Aabb) -> Entity {
    world.spawn((BoxCollider::new(aabb), Obstacle)).id()
}

/// Trees block movement with their trunk and are hit anywhere in their crown.
pub fn spawn_tree(world: &mut World, bounds: Aabb) -> Entity {
    let trunk = bounds.inflate(-bounds.width * 0.6, -bounds.height * 0.7);
    world
        .spawn((
            Tree::new(TREE_HEALTH),
            Bounds::new(bounds),
            BoxCollider::new(trunk),
            Obstacle,
        ))
        .id()
}

pub fn spawn_interactable(world: &mut World, kind: Interactable, zone: Aabb) -> Entity {
    world.spawn((kind, Bounds::new(zone))).id()
}

/// The player systems in per-tick order.
pub fn player_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_input,
            player_status,
            update_action_timers,
            player_target,
            player_movement,
            player_animation,
        )
            .chain(),
    );
    schedule
}

/// Lay out the demo farm around a window of `width` x `height` and spawn the
/// player in the middle.
pub fn setup_farm(world: &mut World, config: &GameConfig) -> Entity {
    let (w, h) = (config.window_width as f32, config.window_height as f32);
    world.init_resource::<SoilPatches>();

    // fences along the window edges
    spawn_obstacle(world, Aabb::new(0.0, -32.0, w, 32.0));
    spawn_obstacle(world, Aabb::new(0.0, h, w, 32.0));
    spawn_obstacle(world, Aabb::new(-32.0, 0.0, 32.0, h));
    spawn_obstacle(world, Aabb::new(w, 0.0, 32.0, h));

    spawn_obstacle(world, Aabb::new(w * 0.5 - 150.0, 80.0, 300.0, 48.0));
    spawn_tree(world, Aabb::new(120.0, 140.0, 128.0, 160.0));
    spawn_tree(world, Aabb::new(w - 260.0, h - 320.0, 128.0, 160.0));
    spawn_interactable(world, Interactable::Trader, Aabb::new(w - 200.0, 40.0, 140.0, 100.0));
    spawn_interactable(world, Interactable::Bed, Aabb::new(40.0, h - 180.0, 120.0, 140.0));

    spawn_player(world, Vector2::new(w * 0.5, h * 0.5), config)
}

/// Wake sleeping players after [`NIGHT_SECONDS`] and dry the soil for the
/// new day.
pub fn night_system(
    mut players: Query<&mut Player>,
    mut soil: ResMut<SoilPatches>,
    time: Res<WorldTime>,
    mut slept: Local<f32>,
) {
    let mut anyone_asleep = false;
    for mut player in players.iter_mut() {
        if !player.sleeping {
            continue;
        }
        anyone_asleep = true;
        if *slept >= NIGHT_SECONDS {
            player.wake();
        }
    }
    if !anyone_asleep {
        *slept = 0.0;
        return;
    }
    if *slept >= NIGHT_SECONDS {
        soil.dry_all();
        info!("a new day begins");
        *slept = 0.0;
    } else {
        *slept += time.delta;
    }
}
