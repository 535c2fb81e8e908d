//! Boolean boundary overlap
//!
//! Never builds intersection points; linear pairs only solve for their
//! parameters and circle pairs compare squared distances.

use crate::foundation::math::ON_BOUNDARY_TOLERANCE;
use crate::shapes::Circle;

use super::closest::closest_operands;
use super::linear::{circle_parameters, overlaps, Linear};
use super::operand::Operand;

/// Whether the boundaries of `a` and `b` touch or cross
pub(crate) fn boundaries_overlap_operands(a: &Operand<'_>, b: &Operand<'_>) -> bool {
    match (a, b) {
        (Operand::Point(_), _) => closest_operands(a, b).distance_squared < ON_BOUNDARY_TOLERANCE,
        (Operand::Linear(a), Operand::Linear(b)) => overlaps(a, b),
        (Operand::Linear(linear), Operand::Circle(circle)) => linear_touches_circle(linear, circle),
        (Operand::Linear(linear), Operand::Edges(edges)) => edges
            .iter()
            .any(|edge| overlaps(linear, &Linear::from_segment(edge))),
        (Operand::Circle(a), Operand::Circle(b)) => circles_touch(a, b),
        (Operand::Circle(circle), Operand::Edges(edges)) => edges
            .iter()
            .any(|edge| linear_touches_circle(&Linear::from_segment(edge), circle)),
        (Operand::Edges(a), Operand::Edges(b)) => a.iter().any(|edge_a| {
            let linear_a = Linear::from_segment(edge_a);
            b.iter().any(|edge_b| overlaps(&linear_a, &Linear::from_segment(edge_b)))
        }),
        (_, Operand::Point(_))
        | (Operand::Circle(_), Operand::Linear(_))
        | (Operand::Edges(_), Operand::Linear(_) | Operand::Circle(_)) => boundaries_overlap_operands(b, a),
    }
}

fn linear_touches_circle(linear: &Linear, circle: &Circle) -> bool {
    if linear.is_degenerate() {
        let gap = (linear.origin - circle.center).norm() - circle.radius;
        return gap * gap < ON_BOUNDARY_TOLERANCE;
    }
    let (ts, count) = circle_parameters(linear, circle);
    ts[..count].iter().any(|&t| linear.contains_t(t))
}

fn circles_touch(a: &Circle, b: &Circle) -> bool {
    let d_squared = (b.center - a.center).norm_squared();
    let sum = a.radius + b.radius;
    let difference = a.radius - b.radius;
    d_squared <= sum * sum && d_squared >= difference * difference
}
