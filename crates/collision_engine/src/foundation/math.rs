//! Math utilities and types
//!
//! Provides the 2D vector type and the numeric policy shared by every
//! geometric query: fixed tolerances, zero-safe normalization and the
//! squared-distance clamp.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Tolerance for determinant, parallel and zero-length checks.
pub const EPSILON: f32 = 1e-10;

/// Squared distance below which a point is treated as lying on a boundary.
pub const ON_BOUNDARY_TOLERANCE: f32 = 1e-6;

/// Length used to give unbounded shapes (rays, lines) a finite extent.
pub const UNBOUNDED_LENGTH: f32 = 250_000.0;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Normalize a vector, returning the zero vector for zero-length input.
///
/// Callers computing normals must treat a zero result as "no reliable
/// normal".
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length_squared = v.norm_squared();
    if length_squared <= EPSILON {
        Vec2::zeros()
    } else {
        v / length_squared.sqrt()
    }
}

/// Perpendicular rotated 90 degrees clockwise (right of `v` with y up).
pub fn perpendicular_right(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Perpendicular rotated 90 degrees counter-clockwise (left of `v` with y up).
pub fn perpendicular_left(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// 2D cross product (z component of the 3D cross product).
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Clamp a squared distance so cancellation error never yields a negative
/// or vanishingly small value.
pub fn clamp_to_zero(value: f32) -> f32 {
    if value < EPSILON {
        0.0
    } else {
        value
    }
}

/// Squared distance between two points, clamped near zero.
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    clamp_to_zero((a - b).norm_squared())
}

/// Rotate a vector by `angle` radians (counter-clockwise with y up).
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize_or_zero(Vec2::zeros()), Vec2::zeros());
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize_or_zero(Vec2::new(3.0, 4.0));
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n, Vec2::new(0.6, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn test_perpendiculars() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(perpendicular_right(v), Vec2::new(0.0, -1.0));
        assert_eq!(perpendicular_left(v), Vec2::new(0.0, 1.0));
        assert_eq!(cross(v, perpendicular_left(v)), 1.0);
    }

    #[test]
    fn test_clamp_to_zero() {
        assert_eq!(clamp_to_zero(-0.5), 0.0);
        assert_eq!(clamp_to_zero(1e-12), 0.0);
        assert_eq!(clamp_to_zero(2.0), 2.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(Vec2::new(1.0, 0.0), constants::HALF_PI);
        assert_relative_eq!(r, Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0);
        assert_relative_eq!(utils::lerp(0.0, 10.0, 0.25), 2.5);
    }
}
