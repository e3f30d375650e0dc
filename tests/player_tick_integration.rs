//! Player tick integration tests: input, status, action timers, movement,
//! collision and animation running together through the player schedule.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use fieldhand::components::animation::Animation;
use fieldhand::components::boxcollider::{Aabb, BoxCollider, Bounds};
use fieldhand::components::interactable::{Interactable, Tree};
use fieldhand::components::inventory::{Inventory, Item};
use fieldhand::components::mapposition::MapPosition;
use fieldhand::components::player::{Activity, Facing, Player, Seed, Tool};
use fieldhand::components::timer::ActionTimers;
use fieldhand::events::audio::{AudioCmd, WATER_FX};
use fieldhand::events::farming::FarmCmd;
use fieldhand::events::interaction::{ShopToggleEvent, WOOD_PER_TREE};
use fieldhand::game;
use fieldhand::resources::animationstore::{AnimationStore, ManifestFrameSource};
use fieldhand::resources::gameconfig::GameConfig;
use fieldhand::resources::input::InputState;
use fieldhand::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;
const START: Vector2 = Vector2 { x: 400.0, y: 300.0 };

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> (World, Entity) {
    let mut world = World::new();
    game::insert_player_resources(&mut world);
    game::register_observers(&mut world);
    let player = game::spawn_player(&mut world, START, &GameConfig::default());
    (world, player)
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn input(world: &mut World) -> Mut<'_, InputState> {
    world.resource_mut::<InputState>()
}

fn player(world: &World, entity: Entity) -> &Player {
    world.get::<Player>(entity).unwrap()
}

fn farm_cmds(world: &mut World) -> Vec<FarmCmd> {
    world.resource_mut::<Messages<FarmCmd>>().drain().collect()
}

fn audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    world.resource_mut::<Messages<AudioCmd>>().drain().collect()
}

#[derive(Resource, Default)]
struct ShopToggles(u32);

fn count_shop_toggles(_trigger: On<ShopToggleEvent>, mut toggles: ResMut<ShopToggles>) {
    toggles.0 += 1;
}

// =============================================================================
// Movement and collision
// =============================================================================

#[test]
fn walking_right_moves_speed_times_delta() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).right.active = true;

    tick(&mut world, &mut schedule, 0.1);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert!(approx_eq(pos.x - START.x, 25.0));
    assert_eq!(pos.y, START.y);
    let p = player(&world, entity);
    assert_eq!(p.facing, Facing::Right);
    assert_eq!(p.activity, Activity::Moving);

    let hitbox = world.get::<BoxCollider>(entity).unwrap().aabb;
    let bounds = world.get::<Bounds>(entity).unwrap().aabb;
    assert_eq!(hitbox.center().x, 425.0);
    assert_eq!(bounds.center().x, hitbox.center().x);
}

#[test]
fn diagonal_movement_is_normalized() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    {
        let mut keys = input(&mut world);
        keys.down.active = true;
        keys.right.active = true;
    }

    tick(&mut world, &mut schedule, 0.1);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    let expected = 25.0 / 2f32.sqrt();
    assert!(approx_eq(pos.x - START.x, expected));
    assert!(approx_eq(pos.y - START.y, expected));
    let p = player(&world, entity);
    assert!(approx_eq(p.direction.length(), 1.0));
    // horizontal input is sampled last and wins the facing
    assert_eq!(p.facing, Facing::Right);
}

#[test]
fn obstacle_to_the_north_stops_hitbox_at_its_bottom() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let wall = Aabb::new(300.0, 200.0, 200.0, 30.0);
    game::spawn_obstacle(&mut world, wall);
    input(&mut world).up.active = true;

    tick(&mut world, &mut schedule, 0.1);

    let hitbox = world.get::<BoxCollider>(entity).unwrap().aabb;
    assert_eq!(hitbox.top(), wall.bottom());
    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert_eq!(pos.y, hitbox.center().y);
    let bounds = world.get::<Bounds>(entity).unwrap().aabb;
    assert_eq!(bounds.center().y, hitbox.center().y);
    assert_eq!(pos.x, START.x);
}

#[test]
fn large_step_into_obstacle_still_ends_flush() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let wall = Aabb::new(450.0, 0.0, 1000.0, 1000.0);
    game::spawn_obstacle(&mut world, wall);
    input(&mut world).right.active = true;

    tick(&mut world, &mut schedule, 1.0);

    let hitbox = world.get::<BoxCollider>(entity).unwrap().aabb;
    assert!(hitbox.right() <= wall.left());
    assert_eq!(hitbox.right(), wall.left());
}

#[test]
fn large_step_cannot_pass_through_a_thin_wall() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let wall = Aabb::new(450.0, 0.0, 10.0, 1000.0);
    game::spawn_obstacle(&mut world, wall);
    input(&mut world).right.active = true;

    tick(&mut world, &mut schedule, 1.0);

    let hitbox = world.get::<BoxCollider>(entity).unwrap().aabb;
    assert_eq!(hitbox.right(), wall.left());
    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert_eq!(pos.x, hitbox.center().x);
}

#[test]
fn sliding_along_a_wall_keeps_the_free_axis() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let wall = Aabb::new(300.0, 200.0, 200.0, 30.0);
    game::spawn_obstacle(&mut world, wall);
    {
        let mut keys = input(&mut world);
        keys.up.active = true;
        keys.right.active = true;
    }

    tick(&mut world, &mut schedule, 0.1);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert!(pos.x > START.x);
    let hitbox = world.get::<BoxCollider>(entity).unwrap().aabb;
    assert_eq!(hitbox.top(), wall.bottom());
}

// =============================================================================
// Status
// =============================================================================

#[test]
fn no_input_means_idle() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).left.active = true;
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(player(&world, entity).activity, Activity::Moving);

    input(&mut world).left.active = false;
    tick(&mut world, &mut schedule, 0.1);
    let p = player(&world, entity);
    assert_eq!(p.activity, Activity::Idle);
    assert_eq!(p.facing, Facing::Left);
    assert_eq!(p.status().label(), "left_idle");
}

#[test]
fn using_a_tool_while_walking_locks_movement() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    {
        let mut keys = input(&mut world);
        keys.right.active = true;
        keys.use_tool.active = true;
    }

    tick(&mut world, &mut schedule, 0.1);

    let p = player(&world, entity);
    assert_eq!(p.direction, Vector2::zero());
    assert_eq!(p.activity, Activity::Tool(Tool::Hoe));
    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, START);

    // keys still held while the swing runs
    tick(&mut world, &mut schedule, 0.1);
    let p = player(&world, entity);
    assert_eq!(p.direction, Vector2::zero());
    assert_eq!(p.activity, Activity::Tool(Tool::Hoe));
    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, START);
}

// =============================================================================
// Tool and seed selection
// =============================================================================

#[test]
fn holding_switch_cycles_once_per_cooldown() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).switch_tool.active = true;

    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).tool_index, 1);
    assert_eq!(player(&world, entity).selected_tool(), Tool::Axe);
    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).tool_index, 1);
    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).tool_index, 2);
    tick(&mut world, &mut schedule, 0.15);
    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).tool_index, 0);
}

#[test]
fn seed_switch_wraps_around() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).switch_seed.active = true;

    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).selected_seed(), Seed::Tomato);
    tick(&mut world, &mut schedule, 0.15);
    tick(&mut world, &mut schedule, 0.15);
    assert_eq!(player(&world, entity).selected_seed(), Seed::Corn);
}

// =============================================================================
// Deferred action effects
// =============================================================================

#[test]
fn hoe_tills_target_when_swing_finishes() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_tool.active = false;

    tick(&mut world, &mut schedule, 0.1);
    tick(&mut world, &mut schedule, 0.1);
    assert!(farm_cmds(&mut world).is_empty());

    tick(&mut world, &mut schedule, 0.1);
    let target = START + Facing::Down.tool_offset();
    assert_eq!(farm_cmds(&mut world), vec![FarmCmd::Till { at: target }]);
    assert!(!world.get::<ActionTimers>(entity).unwrap().tool_use.is_active());

    // fires once
    tick(&mut world, &mut schedule, 0.5);
    assert!(farm_cmds(&mut world).is_empty());
    assert_eq!(player(&world, entity).activity, Activity::Idle);
}

#[test]
fn watering_plays_sound_and_waters_target() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    world.get_mut::<Player>(entity).unwrap().tool_index = 2;
    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_tool.active = false;
    tick(&mut world, &mut schedule, 0.3);

    let target = START + Facing::Down.tool_offset();
    assert_eq!(farm_cmds(&mut world), vec![FarmCmd::Water { at: target }]);
    assert_eq!(
        audio_cmds(&mut world),
        vec![AudioCmd::PlayFx {
            id: WATER_FX.to_string()
        }]
    );
}

#[test]
fn axe_damages_tree_under_target() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let target = START + Facing::Down.tool_offset();
    let tree = world
        .spawn((Tree::new(5), Bounds::new(Aabb::from_center(target, 64.0, 64.0))))
        .id();
    let far_tree = world
        .spawn((Tree::new(5), Bounds::new(Aabb::new(0.0, 0.0, 50.0, 50.0))))
        .id();
    world.get_mut::<Player>(entity).unwrap().tool_index = 1;

    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_tool.active = false;
    tick(&mut world, &mut schedule, 0.3);

    assert_eq!(world.get::<Tree>(tree).unwrap().health, 4);
    assert_eq!(world.get::<Tree>(far_tree).unwrap().health, 5);
    assert!(farm_cmds(&mut world).is_empty());
}

#[test]
fn felling_a_tree_puts_its_wood_in_the_inventory() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    let target = START + Facing::Down.tool_offset();
    let tree = world
        .spawn((Tree::new(1), Bounds::new(Aabb::from_center(target, 64.0, 64.0))))
        .id();
    world.get_mut::<Player>(entity).unwrap().tool_index = 1;

    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_tool.active = false;
    tick(&mut world, &mut schedule, 0.3);

    assert!(!world.get::<Tree>(tree).unwrap().is_alive());
    let inventory = world.get::<Inventory>(entity).unwrap();
    assert_eq!(inventory.item_count(Item::Wood), 5 + WOOD_PER_TREE);
}

#[test]
fn planting_consumes_a_seed() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    input(&mut world).use_seed.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_seed.active = false;
    tick(&mut world, &mut schedule, 0.3);

    let target = START + Facing::Down.tool_offset();
    assert_eq!(
        farm_cmds(&mut world),
        vec![FarmCmd::Plant {
            at: target,
            seed: Seed::Corn
        }]
    );
    assert_eq!(
        world.get::<Inventory>(entity).unwrap().seed_count(Seed::Corn),
        4
    );
}

#[test]
fn planting_without_seeds_does_nothing() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    {
        let mut inventory = world.get_mut::<Inventory>(entity).unwrap();
        while inventory.take_seed(Seed::Corn) {}
    }
    farm_cmds(&mut world);

    input(&mut world).use_seed.active = true;
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).use_seed.active = false;
    tick(&mut world, &mut schedule, 0.3);

    assert!(farm_cmds(&mut world).is_empty());
    let inventory = world.get::<Inventory>(entity).unwrap();
    assert_eq!(inventory.seed_count(Seed::Corn), 0);
    assert_eq!(inventory.seed_count(Seed::Tomato), 5);
}

#[test]
fn tool_and_seed_can_run_together() {
    let (mut world, _entity) = make_world();
    let mut schedule = game::player_schedule();
    {
        let mut keys = input(&mut world);
        keys.use_tool.active = true;
        keys.use_seed.active = true;
    }
    tick(&mut world, &mut schedule, 0.1);
    {
        let mut keys = input(&mut world);
        keys.use_tool.active = false;
        keys.use_seed.active = false;
    }
    tick(&mut world, &mut schedule, 0.3);

    let target = START + Facing::Down.tool_offset();
    assert_eq!(
        farm_cmds(&mut world),
        vec![
            FarmCmd::Till { at: target },
            FarmCmd::Plant {
                at: target,
                seed: Seed::Corn
            }
        ]
    );
}

// =============================================================================
// Interactables
// =============================================================================

#[test]
fn bed_puts_player_to_sleep_and_locks_input() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    game::spawn_interactable(
        &mut world,
        Interactable::Bed,
        Aabb::from_center(START, 100.0, 100.0),
    );
    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);

    let p = player(&world, entity);
    assert!(p.sleeping);
    assert_eq!(p.facing, Facing::Left);
    assert_eq!(p.activity, Activity::Idle);

    {
        let mut keys = input(&mut world);
        keys.interact.sample(false);
        keys.right.active = true;
        keys.use_tool.active = true;
    }
    tick(&mut world, &mut schedule, 0.1);
    let p = player(&world, entity);
    assert_eq!(p.direction, Vector2::zero());
    assert_eq!(p.facing, Facing::Left);
    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, START);
    assert!(!world.get::<ActionTimers>(entity).unwrap().tool_use.is_active());
}

#[test]
fn trader_toggles_the_shop_on_press_edge_only() {
    let (mut world, _entity) = make_world();
    let mut schedule = game::player_schedule();
    world.init_resource::<ShopToggles>();
    world.add_observer(count_shop_toggles);
    game::spawn_interactable(
        &mut world,
        Interactable::Trader,
        Aabb::from_center(START + Vector2::new(120.0, 0.0), 100.0, 100.0),
    );

    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(world.resource::<ShopToggles>().0, 1);

    // still held
    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(world.resource::<ShopToggles>().0, 1);
}

#[test]
fn trader_answers_while_a_tool_swing_runs() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    world.init_resource::<ShopToggles>();
    world.add_observer(count_shop_toggles);
    game::spawn_interactable(
        &mut world,
        Interactable::Trader,
        Aabb::from_center(START + Vector2::new(120.0, 0.0), 100.0, 100.0),
    );

    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);
    {
        let mut keys = input(&mut world);
        keys.use_tool.active = false;
        keys.interact.sample(true);
    }
    tick(&mut world, &mut schedule, 0.1);

    assert!(world.get::<ActionTimers>(entity).unwrap().tool_use.is_active());
    assert_eq!(world.resource::<ShopToggles>().0, 1);
}

#[test]
fn trader_answers_a_sleeping_player() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    world.init_resource::<ShopToggles>();
    world.add_observer(count_shop_toggles);
    game::spawn_interactable(
        &mut world,
        Interactable::Trader,
        Aabb::from_center(START + Vector2::new(120.0, 0.0), 100.0, 100.0),
    );
    world.get_mut::<Player>(entity).unwrap().fall_asleep();

    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);

    assert_eq!(world.resource::<ShopToggles>().0, 1);
    assert!(player(&world, entity).sleeping);
}

#[test]
fn bed_accepts_confirm_while_already_asleep() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    game::spawn_interactable(
        &mut world,
        Interactable::Bed,
        Aabb::from_center(START, 100.0, 100.0),
    );
    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);
    assert!(player(&world, entity).sleeping);

    // a second confirm is only visible if it resets the facing
    world.get_mut::<Player>(entity).unwrap().facing = Facing::Right;
    input(&mut world).interact.sample(false);
    tick(&mut world, &mut schedule, 0.1);
    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);

    let p = player(&world, entity);
    assert!(p.sleeping);
    assert_eq!(p.facing, Facing::Left);
    assert_eq!(p.activity, Activity::Idle);
}

#[test]
fn confirm_away_from_interactables_does_nothing() {
    let (mut world, entity) = make_world();
    let mut schedule = game::player_schedule();
    world.init_resource::<ShopToggles>();
    world.add_observer(count_shop_toggles);
    game::spawn_interactable(
        &mut world,
        Interactable::Trader,
        Aabb::new(2000.0, 2000.0, 50.0, 50.0),
    );

    input(&mut world).interact.sample(true);
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(world.resource::<ShopToggles>().0, 0);
    assert!(!player(&world, entity).sleeping);
}

// =============================================================================
// Animation
// =============================================================================

fn four_frame_store() -> AnimationStore {
    let source = ManifestFrameSource::from_json(
        r#"{"down_idle": ["a", "b", "c", "d"], "right": ["e", "f", "g", "h"], "down_hoe": ["i", "j"]}"#,
    )
    .unwrap();
    AnimationStore::load(&source)
}

#[test]
fn animation_index_survives_status_change() {
    let (mut world, entity) = make_world();
    world.insert_resource(four_frame_store());
    let mut schedule = game::player_schedule();

    tick(&mut world, &mut schedule, 0.5);
    assert!(approx_eq(world.get::<Animation>(entity).unwrap().frame_index, 2.0));

    input(&mut world).right.active = true;
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(player(&world, entity).status().label(), "right");
    assert!(approx_eq(world.get::<Animation>(entity).unwrap().frame_index, 2.4));
}

#[test]
fn animation_wraps_to_first_frame() {
    let (mut world, entity) = make_world();
    world.insert_resource(four_frame_store());
    let mut schedule = game::player_schedule();

    tick(&mut world, &mut schedule, 0.9);
    assert_eq!(world.get::<Animation>(entity).unwrap().frame(), 3);
    tick(&mut world, &mut schedule, 0.2);
    assert_eq!(world.get::<Animation>(entity).unwrap().frame_index, 0.0);
}

#[test]
fn starting_a_swing_restarts_the_animation() {
    let (mut world, entity) = make_world();
    world.insert_resource(four_frame_store());
    let mut schedule = game::player_schedule();

    tick(&mut world, &mut schedule, 0.5);
    input(&mut world).use_tool.active = true;
    tick(&mut world, &mut schedule, 0.1);

    assert_eq!(player(&world, entity).status().label(), "down_hoe");
    assert!(approx_eq(world.get::<Animation>(entity).unwrap().frame_index, 0.4));
}
