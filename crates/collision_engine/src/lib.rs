//! # Collision Engine
//!
//! 2D geometry and collision detection for the Rusteroids engine.
//!
//! ## Features
//!
//! - **Shape Kernel**: closest point, intersection and overlap for every pair
//!   of points, segments, rays, lines, circles, triangles, rects, quads,
//!   polygons and polylines
//! - **Broad Phase**: uniform spatial grid with static and dynamic buckets
//! - **Narrow Phase**: frame-synchronous resolution that reports overlap and
//!   overlap-ended events per body pair
//! - **Physics**: force accumulation, drag, impulses and closed-form elastic
//!   collision formulas
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let mut handler = CollisionHandler::new(Rect::new(0.0, 0.0, 1000.0, 1000.0), 8, 8);
//!
//! let ship = Collider::new(Shape::circle(Vec2::zeros(), 10.0), Transform2D::from_position(Vec2::new(100.0, 100.0)));
//! let rock = Collider::new(Shape::circle(Vec2::zeros(), 20.0), Transform2D::from_position(Vec2::new(120.0, 100.0)));
//! handler.add(BodyId(1), CollisionBody::new(ship, CollisionLayers::PLAYER, CollisionLayers::ENEMY, OwnerId(1)));
//! handler.add(BodyId(2), CollisionBody::new(rock, CollisionLayers::ENEMY, CollisionLayers::PLAYER, OwnerId(2)));
//!
//! handler.update(1.0 / 60.0);
//! let events = handler.resolve();
//! assert_eq!(events.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod queries;
pub mod results;
pub mod shapes;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        foundation::math::Vec2,
        physics::{
            BodyId, Collider, ColliderFlags, CollisionBody, CollisionEvent, CollisionHandler,
            CollisionInformation, CollisionLayers, CollisionListener, OwnerId, PairId, PhysicsState,
            QueryInfo,
        },
        queries::{closest_point, contains, intersect, overlap},
        results::{ClosestPointResult, CollisionPoint, CollisionPoints},
        shapes::{Circle, Line, Polygon, Polyline, Quad, Ray, Rect, Segment, Shape, ShapeKind, Transform2D, Triangle},
        spatial::SpatialGrid,
    };
}
