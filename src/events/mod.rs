//! Event and message types used by the player simulation.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
//! - [`farming`] – till/water/plant requests for the soil layer
//! - [`interaction`] – shop toggling and tree hits, with the tree observer
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod audio;
pub mod farming;
pub mod interaction;
pub mod switchdebug;
