//! A single point produced by a geometric query

use serde::{Deserialize, Serialize};

use crate::foundation::math::{normalize_or_zero, Vec2};

/// A point, its surface normal and a validity bit
///
/// An invalid point carries no geometric meaning and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionPoint {
    /// Location in world space
    pub point: Vec2,
    /// Unit surface normal, zero when no reliable normal exists
    pub normal: Vec2,
    /// Whether this point is meaningful
    pub valid: bool,
}

impl Default for CollisionPoint {
    fn default() -> Self {
        Self::invalid()
    }
}

impl CollisionPoint {
    /// Create a valid collision point
    pub fn new(point: Vec2, normal: Vec2) -> Self {
        Self {
            point,
            normal,
            valid: true,
        }
    }

    /// An invalid point
    pub fn invalid() -> Self {
        Self {
            point: Vec2::zeros(),
            normal: Vec2::zeros(),
            valid: false,
        }
    }

    /// Check if the point is valid
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the normal can be trusted
    pub fn has_normal(&self) -> bool {
        self.valid && self.normal != Vec2::zeros()
    }

    /// Same point with the normal reversed
    pub fn flipped_normal(&self) -> CollisionPoint {
        CollisionPoint {
            normal: -self.normal,
            ..*self
        }
    }

    /// Midpoint of two points with the averaged normal
    ///
    /// An invalid operand is ignored; two invalid operands give an invalid point.
    pub fn average(&self, other: &CollisionPoint) -> CollisionPoint {
        match (self.valid, other.valid) {
            (true, true) => CollisionPoint::new(
                (self.point + other.point) * 0.5,
                normalize_or_zero(self.normal + other.normal),
            ),
            (true, false) => *self,
            (false, true) => *other,
            (false, false) => CollisionPoint::invalid(),
        }
    }

    /// Squared distance from the point to `reference`
    pub fn distance_squared_to(&self, reference: Vec2) -> f32 {
        (self.point - reference).norm_squared()
    }

    /// Whether the normal faces towards `reference`
    pub fn is_facing(&self, reference: Vec2) -> bool {
        self.valid && self.normal.dot(&(reference - self.point)) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_invalid() {
        assert!(!CollisionPoint::default().is_valid());
        assert!(!CollisionPoint::default().has_normal());
    }

    #[test]
    fn test_average() {
        let a = CollisionPoint::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let b = CollisionPoint::new(Vec2::new(2.0, 2.0), Vec2::new(0.0, 1.0));
        let avg = a.average(&b);
        assert_relative_eq!(avg.point, Vec2::new(1.0, 1.0));
        assert_relative_eq!(avg.normal.norm(), 1.0, epsilon = 1e-6);
        assert_eq!(a.average(&CollisionPoint::invalid()), a);
    }

    #[test]
    fn test_facing() {
        let p = CollisionPoint::new(Vec2::zeros(), Vec2::new(0.0, 1.0));
        assert!(p.is_facing(Vec2::new(0.0, 5.0)));
        assert!(!p.is_facing(Vec2::new(0.0, -5.0)));
        assert!(p.flipped_normal().is_facing(Vec2::new(0.0, -5.0)));
    }
}
