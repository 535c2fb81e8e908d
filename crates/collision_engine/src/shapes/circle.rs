//! Circle

use serde::{Deserialize, Serialize};

use crate::foundation::math::{constants, normalize_or_zero, Vec2};
use super::rect::Rect;

/// A circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// The center position of the circle
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
    /// Normals point inward when set
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
            flipped_normals: false,
        }
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Area of the circle
    pub fn area(&self) -> f32 {
        constants::PI * self.radius * self.radius
    }

    /// Circumference of the circle
    pub fn perimeter(&self) -> f32 {
        constants::TAU * self.radius
    }

    /// Check if a point lies inside or on the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Check if this circle overlaps another
    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        let distance_squared = (self.center - other.center).norm_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Surface normal at a boundary point, zero when `point` is the center
    pub fn normal_at(&self, point: Vec2) -> Vec2 {
        let outward = normalize_or_zero(point - self.center);
        if self.flipped_normals {
            -outward
        } else {
            outward
        }
    }

    /// Closest point on the circle boundary to `point`
    ///
    /// A query at the center is resolved along the +x axis.
    pub fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let direction = normalize_or_zero(point - self.center);
        let direction = if direction == Vec2::zeros() {
            Vec2::x()
        } else {
            direction
        };
        self.center + direction * self.radius
    }

    /// Get the penetration depth if overlapping (0.0 if not overlapping)
    pub fn penetration_depth(&self, other: &Circle) -> f32 {
        let distance = (self.center - other.center).norm();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            0.0
        }
    }

    /// Bounding box of the circle
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.center, Vec2::new(self.radius * 2.0, self.radius * 2.0))
    }

    /// Move the circle by `offset`
    pub fn translated(&self, offset: Vec2) -> Circle {
        Circle {
            center: self.center + offset,
            ..*self
        }
    }

    /// Smallest circle around a set of points centered on `center`
    pub fn enclosing(center: Vec2, points: &[Vec2]) -> Circle {
        let radius_squared = points
            .iter()
            .map(|p| (p - center).norm_squared())
            .fold(0.0f32, f32::max);
        Circle::new(center, radius_squared.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_at_boundary() {
        let circle = Circle::new(Vec2::zeros(), 5.0);
        assert_relative_eq!(circle.normal_at(Vec2::new(5.0, 0.0)), Vec2::new(1.0, 0.0));
        let flipped = circle.with_flipped_normals(true);
        assert_relative_eq!(flipped.normal_at(Vec2::new(5.0, 0.0)), Vec2::new(-1.0, 0.0));
        assert_eq!(circle.normal_at(Vec2::zeros()), Vec2::zeros());
    }

    #[test]
    fn test_closest_point_from_center_uses_x_axis() {
        let circle = Circle::new(Vec2::new(1.0, 1.0), 2.0);
        assert_relative_eq!(circle.closest_point_to(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_touching_circles_overlap() {
        let a = Circle::new(Vec2::zeros(), 5.0);
        let b = Circle::new(Vec2::new(10.0, 0.0), 5.0);
        assert!(a.overlaps_circle(&b));
        assert_eq!(a.penetration_depth(&b), 0.0);
    }

    #[test]
    fn test_penetration_depth() {
        let a = Circle::new(Vec2::zeros(), 5.0);
        let b = Circle::new(Vec2::new(8.0, 0.0), 5.0);
        assert_relative_eq!(a.penetration_depth(&b), 2.0);
    }

    #[test]
    fn test_enclosing_circle() {
        let circle = Circle::enclosing(Vec2::zeros(), &[Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.0)]);
        assert_relative_eq!(circle.radius, 5.0);
    }
}
