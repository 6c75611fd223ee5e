use glam::Vec2;

use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Overlap test against the bounding box of a ball, strict on both
    /// axes. Deliberately a box test rather than a true circle test.
    pub fn overlaps_ball_box(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius < self.max.x
            && center.x + radius > self.min.x
            && center.y - radius < self.max.y
            && center.y + radius > self.min.y
    }
}

/// Normalized vertical contact offset: -1 at the paddle's top edge, 0 at its
/// center, 1 at its bottom edge. Edge overlaps can push the value outside
/// [-1, 1]; callers get that raw value, not a clamped one.
pub fn collide_point(ball_y: f32, paddle_top: f32, paddle_height: f32) -> f32 {
    let half = paddle_height / 2.0;
    (ball_y - (paddle_top + half)) / half
}

/// Reflection angle for a contact offset; spans +/- 45 degrees across the
/// paddle face.
pub fn reflection_angle(contact: f32) -> f32 {
    contact * Params::MAX_BOUNCE_ANGLE
}
