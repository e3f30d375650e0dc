//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – frame sequences per player status and their sources
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window and player tuning loaded from INI
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `soil` – tilled, watered and planted cells of the farm grid
//! - `texturestore` – character textures for the renderer (non-send)
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod soil;
pub mod texturestore;
pub mod worldtime;
