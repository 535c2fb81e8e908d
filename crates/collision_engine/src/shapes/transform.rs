//! 2D transform used to place local collider shapes in the world

use serde::{Deserialize, Serialize};

use crate::foundation::math::{rotate, Vec2};

/// Position, rotation and uniform scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Translation in world units
    pub position: Vec2,
    /// Rotation in radians (counter-clockwise with y up)
    pub rotation: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Apply this transform to a point
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.position + rotate(point * self.scale, self.rotation)
    }

    /// Apply rotation only (for directions)
    pub fn apply_direction(&self, direction: Vec2) -> Vec2 {
        rotate(direction, self.rotation)
    }

    /// Whether the transform has no rotation
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0
    }

    /// Combine this transform with a child transform
    pub fn combine(&self, child: &Transform2D) -> Transform2D {
        Transform2D {
            position: self.apply(child.position),
            rotation: self.rotation + child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply_scale_rotate_translate() {
        let transform = Transform2D {
            position: Vec2::new(10.0, 0.0),
            rotation: HALF_PI,
            scale: 2.0,
        };
        assert_relative_eq!(transform.apply(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_combine() {
        let parent = Transform2D::from_position(Vec2::new(5.0, 5.0));
        let child = Transform2D::from_position_rotation(Vec2::new(1.0, 0.0), HALF_PI);
        let combined = parent.combine(&child);
        assert_relative_eq!(combined.position, Vec2::new(6.0, 5.0));
        assert_relative_eq!(combined.rotation, HALF_PI);
    }
}
