//! Soil grid touched by the hoe, the watering can and planted seeds.
//!
//! Tiles are addressed by grid cell; world points are snapped with
//! [`SoilPatches::cell_at`]. Only tilled cells can be watered or planted, and
//! a cell holds at most one plant.
use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::components::player::Seed;

pub const DEFAULT_TILE_SIZE: f32 = 64.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoilTile {
    pub watered: bool,
    pub plant: Option<Seed>,
}

#[derive(Resource, Debug, Clone)]
pub struct SoilPatches {
    pub tile_size: f32,
    tiles: FxHashMap<(i32, i32), SoilTile>,
}

impl Default for SoilPatches {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl SoilPatches {
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            tiles: FxHashMap::default(),
        }
    }

    pub fn cell_at(&self, at: Vector2) -> (i32, i32) {
        (
            (at.x / self.tile_size).floor() as i32,
            (at.y / self.tile_size).floor() as i32,
        )
    }

    /// Till the cell under `at`. Returns false if it was already tilled.
    pub fn till(&mut self, at: Vector2) -> bool {
        let cell = self.cell_at(at);
        if self.tiles.contains_key(&cell) {
            return false;
        }
        self.tiles.insert(cell, SoilTile::default());
        true
    }

    pub fn water(&mut self, at: Vector2) -> bool {
        let cell = self.cell_at(at);
        match self.tiles.get_mut(&cell) {
            Some(tile) => {
                tile.watered = true;
                true
            }
            None => false,
        }
    }

    pub fn plant(&mut self, at: Vector2, seed: Seed) -> bool {
        let cell = self.cell_at(at);
        match self.tiles.get_mut(&cell) {
            Some(tile) if tile.plant.is_none() => {
                tile.plant = Some(seed);
                true
            }
            _ => false,
        }
    }

    /// Start of a new day: every tile dries out.
    pub fn dry_all(&mut self) {
        for tile in self.tiles.values_mut() {
            tile.watered = false;
        }
    }

    pub fn tile(&self, cell: (i32, i32)) -> Option<&SoilTile> {
        self.tiles.get(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32), &SoilTile)> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
