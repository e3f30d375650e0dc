//! Player inventory: harvested items, seed packets and money.
use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::player::Seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Wood,
    Apple,
    Corn,
    Tomato,
}

#[derive(Component, Debug, Clone)]
pub struct Inventory {
    pub items: FxHashMap<Item, u32>,
    pub seeds: FxHashMap<Seed, u32>,
    pub money: u32,
}

impl Default for Inventory {
    /// Starting kit of a new farmer.
    fn default() -> Self {
        let mut items = FxHashMap::default();
        items.insert(Item::Wood, 5);
        items.insert(Item::Apple, 5);
        items.insert(Item::Corn, 0);
        items.insert(Item::Tomato, 0);
        let mut seeds = FxHashMap::default();
        seeds.insert(Seed::Corn, 5);
        seeds.insert(Seed::Tomato, 5);
        Self {
            items,
            seeds,
            money: 200,
        }
    }
}

impl Inventory {
    pub fn item_count(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn add_item(&mut self, item: Item, amount: u32) {
        *self.items.entry(item).or_insert(0) += amount;
    }

    pub fn seed_count(&self, seed: Seed) -> u32 {
        self.seeds.get(&seed).copied().unwrap_or(0)
    }

    /// Remove one packet of `seed`. Returns false, leaving the inventory
    /// untouched, when there is none.
    pub fn take_seed(&mut self, seed: Seed) -> bool {
        match self.seeds.get_mut(&seed) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
