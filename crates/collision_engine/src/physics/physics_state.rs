//! Per-collider physics state
//!
//! Integration order per step: accumulated force (scaled by inverse mass),
//! clear the accumulator, constant acceleration, drag, then displacement.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use super::formulas::apply_drag;

/// Velocity, mass and forces of a physics-capable collider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Mass; zero or less means forces apply unscaled
    pub mass: f32,

    /// Drag coefficient; `1 / drag` approximates seconds to stop
    pub drag: f32,

    /// Acceleration applied every step (gravity, thrusters)
    pub constant_acceleration: Vec2,

    /// Forces added since the last step
    #[serde(skip)]
    pub accumulated_force: Vec2,
}

impl Default for PhysicsState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PhysicsState {
    /// Create a resting state with the given mass
    pub fn new(mass: f32) -> Self {
        Self {
            velocity: Vec2::zeros(),
            mass,
            drag: 0.0,
            constant_acceleration: Vec2::zeros(),
            accumulated_force: Vec2::zeros(),
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the drag coefficient
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag.max(0.0);
        self
    }

    /// Set the constant acceleration
    pub fn with_constant_acceleration(mut self, acceleration: Vec2) -> Self {
        self.constant_acceleration = acceleration;
        self
    }

    /// `1 / mass`, or 1 when the mass is not positive
    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            1.0
        }
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Accumulate a force for the next step
    pub fn add_force(&mut self, force: Vec2) {
        self.accumulated_force += force;
    }

    /// Change velocity at once by `impulse / mass`
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass();
    }

    /// Advance by `dt` seconds and return the displacement
    pub fn integrate(&mut self, dt: f32) -> Vec2 {
        self.velocity += self.accumulated_force * (self.inverse_mass() * dt);
        self.accumulated_force = Vec2::zeros();
        self.velocity += self.constant_acceleration * dt;
        self.velocity = apply_drag(self.velocity, self.drag, dt);
        self.velocity * dt
    }
}
