//! Half-infinite ray and infinite line

use serde::{Deserialize, Serialize};

use crate::foundation::math::{
    normalize_or_zero, perpendicular_left, perpendicular_right, Vec2, UNBOUNDED_LENGTH,
};
use super::rect::Rect;

/// A ray starting at `origin` and extending along `direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// The origin point of the ray
    pub origin: Vec2,
    /// The direction of the ray (unit length, zero when degenerate)
    pub direction: Vec2,
    /// Reverse the normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction: normalize_or_zero(direction),
            flipped_normals: false,
        }
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// Rays without a direction never hit anything
    pub fn is_valid(&self) -> bool {
        self.direction != Vec2::zeros()
    }

    /// Unit normal right of the direction (left when flipped)
    pub fn normal(&self) -> Vec2 {
        if self.flipped_normals {
            perpendicular_left(self.direction)
        } else {
            perpendicular_right(self.direction)
        }
    }

    /// Closest point on the ray to `point` and its distance along the ray
    pub fn closest_point_to(&self, point: Vec2) -> (Vec2, f32) {
        let t = (point - self.origin).dot(&self.direction).max(0.0);
        (self.point_at(t), t)
    }

    /// Finite bounding box reaching `UNBOUNDED_LENGTH` along the ray
    pub fn bounding_box(&self) -> Rect {
        let far = self.point_at(UNBOUNDED_LENGTH);
        Rect::from_min_max(self.origin.inf(&far), self.origin.sup(&far))
    }
}

/// An infinite line through `point` along `direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Any point on the line
    pub point: Vec2,
    /// The direction of the line (unit length, zero when degenerate)
    pub direction: Vec2,
    /// Reverse the normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Line {
    /// Creates a new line through `point` along `direction`
    pub fn new(point: Vec2, direction: Vec2) -> Self {
        Self {
            point,
            direction: normalize_or_zero(direction),
            flipped_normals: false,
        }
    }

    /// Line through two points
    pub fn through(a: Vec2, b: Vec2) -> Self {
        Self::new(a, b - a)
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Get a point along the line at signed distance t
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.point + self.direction * t
    }

    /// Lines without a direction never hit anything
    pub fn is_valid(&self) -> bool {
        self.direction != Vec2::zeros()
    }

    /// Unit normal right of the direction (left when flipped)
    pub fn normal(&self) -> Vec2 {
        if self.flipped_normals {
            perpendicular_left(self.direction)
        } else {
            perpendicular_right(self.direction)
        }
    }

    /// Closest point on the line to `point` and its signed distance along the line
    pub fn closest_point_to(&self, point: Vec2) -> (Vec2, f32) {
        let t = (point - self.point).dot(&self.direction);
        (self.point_at(t), t)
    }

    /// Finite bounding box reaching `UNBOUNDED_LENGTH` both ways
    pub fn bounding_box(&self) -> Rect {
        let a = self.point_at(-UNBOUNDED_LENGTH);
        let b = self.point_at(UNBOUNDED_LENGTH);
        Rect::from_min_max(a.inf(&b), a.sup(&b))
    }
}
