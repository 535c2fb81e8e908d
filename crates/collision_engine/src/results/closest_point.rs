//! Minimum-distance point pair between two shapes

use serde::{Deserialize, Serialize};

use super::collision_point::CollisionPoint;

/// Closest point pair between `self` and `other` shapes
///
/// Edge indices identify which edge of a multi-edge shape produced the
/// minimum; they are `None` for shapes without edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPointResult {
    /// Closest point on the querying shape
    pub self_point: CollisionPoint,
    /// Closest point on the other shape
    pub other_point: CollisionPoint,
    /// Squared distance between the two points (never negative)
    pub distance_squared: f32,
    /// Edge of the querying shape that produced the minimum
    pub self_edge_index: Option<usize>,
    /// Edge of the other shape that produced the minimum
    pub other_edge_index: Option<usize>,
}

impl Default for ClosestPointResult {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ClosestPointResult {
    /// Create a result without edge indices
    pub fn new(self_point: CollisionPoint, other_point: CollisionPoint, distance_squared: f32) -> Self {
        Self {
            self_point,
            other_point,
            distance_squared: distance_squared.max(0.0),
            self_edge_index: None,
            other_edge_index: None,
        }
    }

    /// A result carrying no geometric meaning
    pub fn invalid() -> Self {
        Self {
            self_point: CollisionPoint::invalid(),
            other_point: CollisionPoint::invalid(),
            distance_squared: f32::INFINITY,
            self_edge_index: None,
            other_edge_index: None,
        }
    }

    /// Attach edge indices
    pub fn with_edge_indices(mut self, self_edge: Option<usize>, other_edge: Option<usize>) -> Self {
        self.self_edge_index = self_edge;
        self.other_edge_index = other_edge;
        self
    }

    /// Both points are valid
    pub fn is_valid(&self) -> bool {
        self.self_point.is_valid() && self.other_point.is_valid()
    }

    /// Distance between the two points
    pub fn distance(&self) -> f32 {
        self.distance_squared.sqrt()
    }

    /// Swap the roles of the two shapes
    pub fn reversed(&self) -> ClosestPointResult {
        ClosestPointResult {
            self_point: self.other_point,
            other_point: self.self_point,
            distance_squared: self.distance_squared,
            self_edge_index: self.other_edge_index,
            other_edge_index: self.self_edge_index,
        }
    }

    /// Whether this result is strictly closer than `other`
    ///
    /// Invalid results are never closer; ties keep the existing result.
    pub fn is_closer_than(&self, other: &ClosestPointResult) -> bool {
        self.is_valid() && (!other.is_valid() || self.distance_squared < other.distance_squared)
    }
}
