//! Animation system.
//!
//! Advances each player's [`Animation`] cursor by its frame rate and wraps it
//! at the length of the sequence for the player's current status, as stored
//! in [`AnimationStore`].
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::player::Player;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn player_animation(
    mut query: Query<(&mut Animation, &Player)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut animation, player) in query.iter_mut() {
        let frame_count = animation_store.frame_count(&player.status());
        animation.advance(time.delta, frame_count);
    }
}
