//! Axis-aligned rectangles used for collision and placement.
//!
//! [`Aabb`] is a plain value type (top-left corner plus size) with the edge
//! and centre accessors the movement code needs. Two components wrap it:
//! - [`BoxCollider`] – the solid hitbox used by the collision resolver
//! - [`Bounds`] – the visual rectangle used for interaction and targeting
//!
//! Entities that block movement also carry the [`Obstacle`] marker.
use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose centre sits on `center`.
    pub fn from_center(center: Vector2, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    pub fn top(&self) -> f32 {
        self.y
    }
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
    pub fn set_center_x(&mut self, cx: f32) {
        self.x = cx - self.width / 2.0;
    }
    pub fn set_center_y(&mut self, cy: f32) {
        self.y = cy - self.height / 2.0;
    }

    /// Grow (or shrink, with negative values) around the current centre.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        let center = self.center();
        Self::from_center(center, self.width + dw, self.height + dh)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open point containment: the left/top edges are inside, the
    /// right/bottom edges are not.
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Solid hitbox, usually smaller than the visual [`Bounds`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub aabb: Aabb,
}

impl BoxCollider {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// Visual rectangle of an entity (sprite rect, tree canopy, interaction zone).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub aabb: Aabb,
}

impl Bounds {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// Marker for entities whose [`BoxCollider`] blocks player movement.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Obstacle;
