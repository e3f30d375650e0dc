//! Events raised by player actions on other entities.
//!
//! - [`ShopToggleEvent`] – the player confirmed while standing at the trader
//! - [`TreeHitEvent`] – the axe landed on a tree; [`observe_tree_hit`] applies
//!   the damage and hands the wood of a felled tree to the chopper
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::interactable::Tree;
use crate::components::inventory::{Inventory, Item};

/// Wood dropped by a tree on the hit that fells it.
pub const WOOD_PER_TREE: u32 = 3;

/// Open or close the shop.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShopToggleEvent {}

/// An axe swing by `by` hit `tree`.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreeHitEvent {
    pub tree: Entity,
    pub by: Entity,
}

/// Observer that forwards a [`TreeHitEvent`] to [`Tree::damage`].
///
/// Stumps take no further damage. The hit that fells a tree adds
/// [`WOOD_PER_TREE`] wood to the chopper's [`Inventory`], if it has one.
pub fn observe_tree_hit(
    trigger: On<TreeHitEvent>,
    mut trees: Query<&mut Tree>,
    mut inventories: Query<&mut Inventory>,
) {
    let TreeHitEvent { tree: entity, by } = *trigger.event();
    let Ok(mut tree) = trees.get_mut(entity) else {
        return;
    };
    if !tree.is_alive() {
        debug!("tree {:?} is already a stump", entity);
        return;
    }
    tree.damage();
    debug!("tree {:?} hit, health {}", entity, tree.health);
    if tree.is_alive() {
        return;
    }
    info!("tree {:?} felled", entity);
    if let Ok(mut inventory) = inventories.get_mut(by) {
        inventory.add_item(Item::Wood, WOOD_PER_TREE);
        debug!("{:?} now carries {} wood", by, inventory.item_count(Item::Wood));
    }
}
