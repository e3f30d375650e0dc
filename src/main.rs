//! Fieldhand demo entry point.
//!
//! A small farm built with:
//! - **raylib** for windowing, graphics, input, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Walk with the arrow keys, use the selected tool with space and cycle tools
//! with Q. Plant with left control and cycle seeds with W. Press enter at
//! the trader or the bed, and F11 for the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window, start the audio thread
//! 2. Load the character animations and their textures
//! 3. Spawn the farm and the player, register observers
//! 4. Every frame: poll input, advance time, run the player systems, apply
//!    farm and audio commands, render
//! 5. Clean up the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use fieldhand::events::audio::{AudioCmd, WATER_FX};
use fieldhand::game;
use fieldhand::resources::animationstore::{AnimationStore, FolderFrameSource};
use fieldhand::resources::audio::{setup_audio, shutdown_audio};
use fieldhand::resources::debugmode::DebugMode;
use fieldhand::resources::gameconfig::GameConfig;
use fieldhand::resources::texturestore::TextureStore;
use fieldhand::resources::worldtime::WorldTime;
use fieldhand::systems::animation::player_animation;
use fieldhand::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use fieldhand::systems::farming::{apply_farm_cmds, update_farm_cmds};
use fieldhand::systems::input::update_input_state;
use fieldhand::systems::playerinput::player_input;
use fieldhand::systems::render::render_system;
use fieldhand::systems::time::{update_action_timers, update_world_time};

/// Fieldhand farm demo
#[derive(Parser)]
#[command(version, about = "Walk, hoe, water and plant on a tiny farm.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration back to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: dump the configuration and quit (no window/audio needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Starting Fieldhand");
    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Fieldhand")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let animations = AnimationStore::load(&FolderFrameSource::new(&config.character_dir));
    let mut textures = TextureStore::new();
    textures.load_frames(&mut rl, &thread, &animations);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    game::insert_player_resources(&mut world);
    world.insert_resource(animations);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Init audio
    setup_audio(&mut world);
    {
        let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
        cmds.write(AudioCmd::LoadFx {
            id: WATER_FX.to_string(),
            path: config.water_sound.to_string_lossy().into_owned(),
        });
        cmds.write(AudioCmd::VolumeFx {
            id: WATER_FX.to_string(),
            vol: config.water_volume,
        });
    }

    game::register_observers(&mut world);
    game::setup_farm(&mut world, &config);
    world.insert_resource(config);

    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = game::player_schedule();
    update.add_systems(update_input_state.before(player_input));
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain()
            .after(update_action_timers),
    );
    update.add_systems(
        (update_farm_cmds, apply_farm_cmds)
            .chain()
            .after(update_action_timers),
    );
    update.add_systems(game::night_system.after(player_input));
    update.add_systems(render_system.after(player_animation).after(apply_farm_cmds));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
