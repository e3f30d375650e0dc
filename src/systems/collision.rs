//! Axis-separated hitbox resolution against static obstacles.
//!
//! The movement system applies one axis of displacement, calls
//! [`resolve_axis`] for that axis, then repeats for the other. Resolving each
//! axis on its own lets a diagonal mover slide along a wall instead of
//! sticking to it, and a single oversized step still ends flush against the
//! obstacle it crossed into.
use crate::components::boxcollider::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Push `hitbox` out of every obstacle it overlaps along `axis`.
///
/// `previous` is the hitbox before this axis's displacement was applied.
/// `direction` is the movement intent on that axis: a positive value clamps
/// the right/bottom edge to the obstacle's left/top edge, a negative value
/// clamps the left/top edge to the obstacle's right/bottom edge, and zero
/// leaves the hitbox in place. Obstacles are visited in order, so when several
/// overlap the last one wins.
///
/// An obstacle lying wholly between the old and new leading edges (a thin
/// wall crossed in one oversized step) also stops the hitbox; the nearest one
/// wins.
///
/// Returns true when at least one obstacle was hit, in which case the caller
/// resynchronizes its position from the hitbox centre on `axis`.
pub fn resolve_axis(
    hitbox: &mut Aabb,
    previous: &Aabb,
    axis: Axis,
    direction: f32,
    obstacles: &[Aabb],
) -> bool {
    let mut collided = false;
    for obstacle in obstacles {
        if !obstacle.overlaps(hitbox) {
            continue;
        }
        collided = true;
        clamp_leading_edge(hitbox, obstacle, axis, direction);
    }

    // Each clamp only shortens the travel, so this settles on the nearest.
    for obstacle in obstacles {
        if crossed(previous, hitbox, obstacle, axis, direction) {
            collided = true;
            clamp_leading_edge(hitbox, obstacle, axis, direction);
        }
    }
    collided
}

fn clamp_leading_edge(hitbox: &mut Aabb, obstacle: &Aabb, axis: Axis, direction: f32) {
    match axis {
        Axis::Horizontal => {
            if direction > 0.0 {
                hitbox.set_right(obstacle.left());
            }
            if direction < 0.0 {
                hitbox.set_left(obstacle.right());
            }
        }
        Axis::Vertical => {
            if direction > 0.0 {
                hitbox.set_bottom(obstacle.top());
            }
            if direction < 0.0 {
                hitbox.set_top(obstacle.bottom());
            }
        }
    }
}

/// True when `obstacle` sits ahead of the `previous` leading edge, behind the
/// current one, and overlaps the hitbox on the other axis.
fn crossed(previous: &Aabb, hitbox: &Aabb, obstacle: &Aabb, axis: Axis, direction: f32) -> bool {
    match axis {
        Axis::Horizontal => {
            let beside = obstacle.top() < hitbox.bottom() && obstacle.bottom() > hitbox.top();
            if direction > 0.0 {
                beside && obstacle.left() >= previous.right() && obstacle.left() < hitbox.right()
            } else if direction < 0.0 {
                beside && obstacle.right() <= previous.left() && obstacle.right() > hitbox.left()
            } else {
                false
            }
        }
        Axis::Vertical => {
            let beside = obstacle.left() < hitbox.right() && obstacle.right() > hitbox.left();
            if direction > 0.0 {
                beside && obstacle.top() >= previous.bottom() && obstacle.top() < hitbox.bottom()
            } else if direction < 0.0 {
                beside && obstacle.bottom() <= previous.top() && obstacle.bottom() > hitbox.top()
            } else {
                false
            }
        }
    }
}
