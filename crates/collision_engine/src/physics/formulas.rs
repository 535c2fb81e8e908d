//! Closed-form physics formulas
//!
//! Pure functions; callers decide what to do with the results.

use crate::foundation::math::{normalize_or_zero, Vec2, EPSILON};

/// Apply drag for one step of `dt` seconds
///
/// `1 / coefficient` approximates the seconds needed to stop. The drag never
/// reverses the velocity: a step that would overshoot stops it instead.
pub fn apply_drag(velocity: Vec2, coefficient: f32, dt: f32) -> Vec2 {
    if coefficient <= 0.0 || dt <= 0.0 {
        return velocity;
    }
    let drag = -velocity * coefficient * dt;
    if drag.norm_squared() >= velocity.norm_squared() {
        Vec2::zeros()
    } else {
        velocity + drag
    }
}

/// Post-collision velocity of body 1 along one axis
///
/// `restitution` is 1 for a perfectly elastic and 0 for a perfectly
/// inelastic collision.
pub fn elastic_collision_1d(v1: f32, m1: f32, v2: f32, m2: f32, restitution: f32) -> f32 {
    let total = m1 + m2;
    if total <= 0.0 {
        return v1;
    }
    (m1 * v1 + m2 * v2 + m2 * restitution * (v2 - v1)) / total
}

/// Post-collision velocity of body 1 for two bodies colliding at `p1` and `p2`
pub fn elastic_collision_2d(p1: Vec2, v1: Vec2, m1: f32, p2: Vec2, v2: Vec2, m2: f32, restitution: f32) -> Vec2 {
    let total = m1 + m2;
    if total <= 0.0 {
        return v1;
    }
    elastic_collision_2d_mass_ratio(p1, v1, p2, v2, m2 / total, restitution)
}

/// [`elastic_collision_2d`] with `mass_ratio = m2 / (m1 + m2)` precomputed
pub fn elastic_collision_2d_mass_ratio(p1: Vec2, v1: Vec2, p2: Vec2, v2: Vec2, mass_ratio: f32, restitution: f32) -> Vec2 {
    let offset = p1 - p2;
    let distance_squared = offset.norm_squared();
    if distance_squared <= EPSILON {
        return v1;
    }
    let approach = (v1 - v2).dot(&offset) / distance_squared;
    v1 - offset * ((1.0 + restitution) * mass_ratio * approach)
}

/// Force pulling a body at `position` toward `center`
///
/// The pull falls off linearly from `strength` at the center to zero at
/// `radius`; a `radius <= 0` never falls off. `damping` adds a drag term
/// against `velocity`. Bodies at or beyond `radius` feel nothing.
pub fn attraction_force(center: Vec2, position: Vec2, velocity: Vec2, strength: f32, radius: f32, damping: f32) -> Vec2 {
    let offset = center - position;
    let distance = offset.norm();
    let falloff = if radius > 0.0 {
        if distance >= radius {
            return Vec2::zeros();
        }
        1.0 - distance / radius
    } else {
        1.0
    };
    normalize_or_zero(offset) * (strength * falloff) - velocity * damping
}

/// Reflect `velocity` off a surface with `normal`
///
/// Only the approaching component is reflected and scaled by `restitution`;
/// a body already moving away is returned unchanged.
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let normal = normalize_or_zero(normal);
    let approach = velocity.dot(&normal);
    if approach >= 0.0 {
        return velocity;
    }
    velocity - normal * ((1.0 + restitution) * approach)
}
