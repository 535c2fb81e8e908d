//! Collider: a shape placed in the world plus its physics state

use std::borrow::Cow;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use crate::shapes::{Rect, Shape, Transform2D};
use super::physics_state::PhysicsState;

bitflags! {
    /// Participation flags of a collider
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ColliderFlags: u32 {
        /// Participates in the broad phase at all
        const ENABLED = 1 << 0;
        /// Receives overlap events from narrow-phase resolution
        const COMPUTE_COLLISION = 1 << 1;
        /// Computes exact intersection points instead of overlap only
        const COMPUTE_INTERSECTIONS = 1 << 2;
        /// Closed shapes are resolved as their bounding circle
        const SIMPLIFY_COLLISION = 1 << 3;
        /// Integrates its physics state during the handler update
        const PHYSICS = 1 << 4;
    }
}

impl Default for ColliderFlags {
    fn default() -> Self {
        Self::ENABLED | Self::COMPUTE_COLLISION | Self::COMPUTE_INTERSECTIONS
    }
}

/// A local-space shape, its world transform and physics parameters
///
/// The world-space shape and bounding box are cached and refreshed whenever
/// the shape or transform changes.
#[derive(Debug, Clone)]
pub struct Collider {
    local_shape: Shape,
    transform: Transform2D,
    world_shape: Shape,
    bounding_box: Rect,
    previous_position: Vec2,
    is_static: bool,
    /// Velocity, mass, drag and forces
    pub physics: PhysicsState,
    /// Participation flags
    pub flags: ColliderFlags,
}

impl Collider {
    /// Create a dynamic collider with default flags
    pub fn new(shape: Shape, transform: Transform2D) -> Self {
        let world_shape = shape.transformed(&transform);
        let bounding_box = world_shape.bounding_box();
        Self {
            local_shape: shape,
            transform,
            world_shape,
            bounding_box,
            previous_position: transform.position,
            is_static: false,
            physics: PhysicsState::default(),
            flags: ColliderFlags::default(),
        }
    }

    /// Replace the flags
    pub fn with_flags(mut self, flags: ColliderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attach a physics state and enable integration
    pub fn with_physics(mut self, physics: PhysicsState) -> Self {
        self.physics = physics;
        self.flags.insert(ColliderFlags::PHYSICS);
        self
    }

    /// Never moves; bucketed once instead of every frame
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether the collider is bucketed as static
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// World-space shape
    pub fn shape(&self) -> &Shape {
        &self.world_shape
    }

    /// Local-space shape
    pub fn local_shape(&self) -> &Shape {
        &self.local_shape
    }

    /// Replace the local-space shape
    pub fn set_shape(&mut self, shape: Shape) {
        self.local_shape = shape;
        self.refresh();
    }

    /// Shape used by narrow-phase resolution
    ///
    /// With [`ColliderFlags::SIMPLIFY_COLLISION`] closed shapes become their
    /// bounding circle.
    pub fn collision_shape(&self) -> Cow<'_, Shape> {
        if self.flags.contains(ColliderFlags::SIMPLIFY_COLLISION) && self.world_shape.is_closed() {
            Cow::Owned(Shape::Circle(self.world_shape.bounding_circle()))
        } else {
            Cow::Borrowed(&self.world_shape)
        }
    }

    /// World bounding box
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Current transform
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Replace the transform
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
        self.refresh();
    }

    /// World position
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Move to `position`
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
        self.refresh();
    }

    /// Rotate to `rotation` radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.rotation = rotation;
        self.refresh();
    }

    /// Position at the start of the current frame
    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Movement since the start of the current frame
    pub fn frame_displacement(&self) -> Vec2 {
        self.transform.position - self.previous_position
    }

    /// Linear velocity
    pub fn velocity(&self) -> Vec2 {
        self.physics.velocity
    }

    /// Set the linear velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.physics.velocity = velocity;
    }

    /// Accumulate a force for the next update
    pub fn add_force(&mut self, force: Vec2) {
        self.physics.add_force(force);
    }

    /// Change velocity at once
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.physics.add_impulse(impulse);
    }

    /// Whether the collider takes part in the broad phase
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ColliderFlags::ENABLED)
    }

    /// Enable or disable the collider
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(ColliderFlags::ENABLED, enabled);
    }

    /// Whether the collider receives overlap events
    pub fn computes_collision(&self) -> bool {
        self.flags.contains(ColliderFlags::COMPUTE_COLLISION)
    }

    /// Whether overlap events carry intersection points
    pub fn computes_intersections(&self) -> bool {
        self.flags.contains(ColliderFlags::COMPUTE_INTERSECTIONS)
    }

    /// Record the frame start position
    pub(crate) fn begin_frame(&mut self) {
        self.previous_position = self.transform.position;
    }

    /// Integrate physics when enabled and move by the displacement
    pub(crate) fn step(&mut self, dt: f32) {
        if !self.flags.contains(ColliderFlags::PHYSICS) {
            return;
        }
        let displacement = self.physics.integrate(dt);
        if displacement != Vec2::zeros() {
            self.transform.position += displacement;
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.world_shape = self.local_shape.transformed(&self.transform);
        self.bounding_box = self.world_shape.bounding_box();
    }
}
