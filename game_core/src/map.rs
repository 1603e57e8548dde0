use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Clamp the top edge of something `extent` tall into `[0, bound - extent]`
pub fn clamp_top(y: f32, extent: f32, bound: f32) -> f32 {
    y.clamp(0.0, (bound - extent).max(0.0))
}

/// The playing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// True when a span `[y, y + extent]` touches or crosses the top or bottom wall
    pub fn breaches_wall(&self, y: f32, extent: f32) -> bool {
        y <= 0.0 || y + extent >= self.height
    }

    /// Which side wins the point when the ball's left edge is at `x`
    pub fn scoring_side(&self, x: f32) -> Option<Side> {
        if x <= 0.0 {
            Some(Side::Ai)
        } else if x >= self.width {
            Some(Side::Player)
        } else {
            None
        }
    }
}
