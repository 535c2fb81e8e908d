//! Spatial partitioning data structures
//!
//! Provides the broad-phase index used by the collision handler to cull
//! pairs of bodies that cannot possibly be touching.

mod grid;

pub use grid::SpatialGrid;
