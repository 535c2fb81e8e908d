//! Pairwise geometric queries between shapes
//!
//! Three families are offered for every ordered pair of [`Shape`] variants:
//! [`closest_point`], [`overlap`] and [`intersect`]. None of them fail; invalid
//! shapes produce invalid results, `false` or `None`.
//!
//! Results are symmetric: swapping the operands swaps the `self`/`other`
//! roles and leaves the squared distance unchanged.

mod closest;
mod contains;
mod intersect;
mod linear;
mod operand;
mod overlap;


use crate::results::{ClosestPointResult, CollisionPoint, CollisionPoints};
use crate::shapes::Shape;

use operand::Operand;

/// Minimum-distance point pair between `a` and `b`
///
/// When one shape contains the other's reference point the shapes overlap,
/// so the distance is zero at that point. The boundary result's normals and
/// edge indices are kept in that case.
pub fn closest_point(a: &Shape, b: &Shape) -> ClosestPointResult {
    let (Some(operand_a), Some(operand_b)) = (Operand::from_shape(a), Operand::from_shape(b)) else {
        return ClosestPointResult::invalid();
    };
    let boundary = closest::closest_operands(&operand_a, &operand_b);
    if boundary.distance_squared == 0.0 {
        return boundary;
    }
    match contains::contained_reference(a, b) {
        Some(point) => ClosestPointResult {
            self_point: CollisionPoint::new(point, boundary.self_point.normal),
            other_point: CollisionPoint::new(point, boundary.other_point.normal),
            distance_squared: 0.0,
            ..boundary
        },
        None => boundary,
    }
}

/// Whether `a` and `b` share any point
///
/// Short-circuits on reference-point containment before testing the
/// boundaries against each other.
pub fn overlap(a: &Shape, b: &Shape) -> bool {
    let (Some(operand_a), Some(operand_b)) = (Operand::from_shape(a), Operand::from_shape(b)) else {
        return false;
    };
    contains::contained_reference(a, b).is_some() || overlap::boundaries_overlap_operands(&operand_a, &operand_b)
}

/// Whether the boundaries of `a` and `b` touch or cross
pub fn boundaries_overlap(a: &Shape, b: &Shape) -> bool {
    match (Operand::from_shape(a), Operand::from_shape(b)) {
        (Some(operand_a), Some(operand_b)) => overlap::boundaries_overlap_operands(&operand_a, &operand_b),
        _ => false,
    }
}

/// Whether a closed shape contains the other's reference point
pub fn contains(a: &Shape, b: &Shape) -> bool {
    contains::contained_reference(a, b).is_some()
}

/// Boundary intersection points, `None` when there are none
///
/// Each point carries the normal of `b` at that point. Parallel linear
/// boundaries never intersect, even when collinear.
pub fn intersect(a: &Shape, b: &Shape) -> Option<CollisionPoints> {
    let (Some(operand_a), Some(operand_b)) = (Operand::from_shape(a), Operand::from_shape(b)) else {
        return None;
    };
    intersect::intersect_operands(&operand_a, &operand_b).into_option()
}

impl Shape {
    /// See [`closest_point`]
    pub fn closest_point(&self, other: &Shape) -> ClosestPointResult {
        closest_point(self, other)
    }

    /// See [`overlap`]
    pub fn overlaps(&self, other: &Shape) -> bool {
        overlap(self, other)
    }

    /// See [`intersect`]
    pub fn intersect(&self, other: &Shape) -> Option<CollisionPoints> {
        intersect(self, other)
    }

    /// See [`contains`]
    pub fn contains_shape(&self, other: &Shape) -> bool {
        contains(self, other)
    }
}
