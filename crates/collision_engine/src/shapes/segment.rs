//! Line segment between two points

use serde::{Deserialize, Serialize};

use crate::foundation::math::{
    normalize_or_zero, perpendicular_left, perpendicular_right, Vec2, EPSILON,
};
use super::rect::Rect;

/// A finite segment from `start` to `end`
///
/// The normal is right of the direction `start -> end`, or left of it when
/// `flipped_normals` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: Vec2,
    /// End point
    pub end: Vec2,
    /// Reverse the normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            flipped_normals: false,
        }
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Vector from start to end
    pub fn displacement(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unit direction, zero for a degenerate segment
    pub fn direction(&self) -> Vec2 {
        normalize_or_zero(self.displacement())
    }

    /// Length of the segment
    pub fn length(&self) -> f32 {
        self.displacement().norm()
    }

    /// Squared length of the segment
    pub fn length_squared(&self) -> f32 {
        self.displacement().norm_squared()
    }

    /// Midpoint
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// A zero-length segment behaves as a point
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() <= EPSILON
    }

    /// Unit normal, zero for a degenerate segment
    pub fn normal(&self) -> Vec2 {
        let direction = self.direction();
        if self.flipped_normals {
            perpendicular_left(direction)
        } else {
            perpendicular_right(direction)
        }
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.displacement() * t
    }

    /// Same segment traversed end to start
    pub fn reversed(&self) -> Segment {
        Segment {
            start: self.end,
            end: self.start,
            flipped_normals: self.flipped_normals,
        }
    }

    /// Closest point on the segment to `point` and its parameter in `[0, 1]`
    pub fn closest_point_to(&self, point: Vec2) -> (Vec2, f32) {
        let displacement = self.displacement();
        let length_squared = displacement.norm_squared();
        if length_squared <= EPSILON {
            return (self.start, 0.0);
        }
        let t = ((point - self.start).dot(&displacement) / length_squared).clamp(0.0, 1.0);
        (self.start + displacement * t, t)
    }

    /// Bounding box of the segment
    pub fn bounding_box(&self) -> Rect {
        Rect::from_min_max(self.start.inf(&self.end), self.start.sup(&self.end))
    }

    /// Move the segment by `offset`
    pub fn translated(&self, offset: Vec2) -> Segment {
        Segment {
            start: self.start + offset,
            end: self.end + offset,
            flipped_normals: self.flipped_normals,
        }
    }
}
