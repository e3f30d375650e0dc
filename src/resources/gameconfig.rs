//! Game configuration resource.
//!
//! Manages window and player tuning loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [player]
//! speed = 250
//! animation_fps = 4
//! tool_use_ms = 350
//! tool_switch_ms = 200
//! seed_use_ms = 350
//! seed_switch_ms = 200
//! hitbox_inset_x = 126
//! hitbox_inset_y = 70
//!
//! [assets]
//! character_dir = ./graphics/character
//! water_sound = ./audio/water.mp3
//! water_volume = 0.01
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_PLAYER_SPEED: f32 = 250.0;
const DEFAULT_ANIMATION_FPS: f32 = 4.0;
const DEFAULT_TOOL_USE_MS: u32 = 350;
const DEFAULT_TOOL_SWITCH_MS: u32 = 200;
const DEFAULT_SEED_USE_MS: u32 = 350;
const DEFAULT_SEED_SWITCH_MS: u32 = 200;
const DEFAULT_SPRITE_SIZE: f32 = 192.0;
const DEFAULT_HITBOX_INSET_X: f32 = 126.0;
const DEFAULT_HITBOX_INSET_Y: f32 = 70.0;
const DEFAULT_CHARACTER_DIR: &str = "./graphics/character";
const DEFAULT_WATER_SOUND: &str = "./audio/water.mp3";
const DEFAULT_WATER_VOLUME: f32 = 0.01;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Player walking speed in pixels per second.
    pub player_speed: f32,
    /// Animation frames advanced per second.
    pub animation_fps: f32,
    pub tool_use_ms: u32,
    pub tool_switch_ms: u32,
    pub seed_use_ms: u32,
    pub seed_switch_ms: u32,
    /// Width and height of the player's visual rect.
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// How much narrower/shorter the hitbox is than the visual rect.
    pub hitbox_inset_x: f32,
    pub hitbox_inset_y: f32,
    /// Root folder holding one sub-folder of frames per status label.
    pub character_dir: PathBuf,
    pub water_sound: PathBuf,
    pub water_volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            player_speed: DEFAULT_PLAYER_SPEED,
            animation_fps: DEFAULT_ANIMATION_FPS,
            tool_use_ms: DEFAULT_TOOL_USE_MS,
            tool_switch_ms: DEFAULT_TOOL_SWITCH_MS,
            seed_use_ms: DEFAULT_SEED_USE_MS,
            seed_switch_ms: DEFAULT_SEED_SWITCH_MS,
            sprite_width: DEFAULT_SPRITE_SIZE,
            sprite_height: DEFAULT_SPRITE_SIZE,
            hitbox_inset_x: DEFAULT_HITBOX_INSET_X,
            hitbox_inset_y: DEFAULT_HITBOX_INSET_Y,
            character_dir: PathBuf::from(DEFAULT_CHARACTER_DIR),
            water_sound: PathBuf::from(DEFAULT_WATER_SOUND),
            water_volume: DEFAULT_WATER_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, speed={}, tool_use={}ms, seed_use={}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.player_speed,
            self.tool_use_ms,
            self.seed_use_ms
        );

        Ok(())
    }

    /// Parse configuration from INI text, as [`load_from_file`](Self::load_from_file) does.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let get_u32 = |section: &str, key: &str| {
            config
                .getuint(section, key)
                .ok()
                .flatten()
                .map(|v| v as u32)
        };
        let get_f32 = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = get_u32("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_u32("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_u32("window", "target_fps") {
            self.target_fps = fps;
        }

        // [player] section
        if let Some(speed) = get_f32("player", "speed") {
            self.player_speed = speed;
        }
        if let Some(fps) = get_f32("player", "animation_fps") {
            self.animation_fps = fps;
        }
        if let Some(ms) = get_u32("player", "tool_use_ms") {
            self.tool_use_ms = ms;
        }
        if let Some(ms) = get_u32("player", "tool_switch_ms") {
            self.tool_switch_ms = ms;
        }
        if let Some(ms) = get_u32("player", "seed_use_ms") {
            self.seed_use_ms = ms;
        }
        if let Some(ms) = get_u32("player", "seed_switch_ms") {
            self.seed_switch_ms = ms;
        }
        if let Some(w) = get_f32("player", "sprite_width") {
            self.sprite_width = w;
        }
        if let Some(h) = get_f32("player", "sprite_height") {
            self.sprite_height = h;
        }
        if let Some(x) = get_f32("player", "hitbox_inset_x") {
            self.hitbox_inset_x = x;
        }
        if let Some(y) = get_f32("player", "hitbox_inset_y") {
            self.hitbox_inset_y = y;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "character_dir") {
            self.character_dir = PathBuf::from(dir);
        }
        if let Some(sound) = config.get("assets", "water_sound") {
            self.water_sound = PathBuf::from(sound);
        }
        if let Some(vol) = get_f32("assets", "water_volume") {
            self.water_volume = vol;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "animation_fps", Some(self.animation_fps.to_string()));
        config.set("player", "tool_use_ms", Some(self.tool_use_ms.to_string()));
        config.set("player", "tool_switch_ms", Some(self.tool_switch_ms.to_string()));
        config.set("player", "seed_use_ms", Some(self.seed_use_ms.to_string()));
        config.set("player", "seed_switch_ms", Some(self.seed_switch_ms.to_string()));
        config.set("player", "sprite_width", Some(self.sprite_width.to_string()));
        config.set("player", "sprite_height", Some(self.sprite_height.to_string()));
        config.set("player", "hitbox_inset_x", Some(self.hitbox_inset_x.to_string()));
        config.set("player", "hitbox_inset_y", Some(self.hitbox_inset_y.to_string()));

        // [assets] section
        config.set(
            "assets",
            "character_dir",
            Some(self.character_dir.to_string_lossy().into_owned()),
        );
        config.set(
            "assets",
            "water_sound",
            Some(self.water_sound.to_string_lossy().into_owned()),
        );
        config.set("assets", "water_volume", Some(self.water_volume.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
