//! Closest point pairs for every operand class pair
//!
//! Multi-edge operands are reduced to per-edge sub-queries. A sub-result
//! replaces the current best only when strictly closer, so ties keep the
//! first edge found.

use crate::foundation::math::{distance_squared, normalize_or_zero, Vec2};
use crate::results::{ClosestPointResult, CollisionPoint};
use crate::shapes::{Circle, Segment};

use super::intersect::circle_circle_points;
use super::linear::{circle_parameters, closest_pair, Linear};
use super::operand::Operand;

/// Closest pair with `a` as the querying side
pub(crate) fn closest_operands(a: &Operand<'_>, b: &Operand<'_>) -> ClosestPointResult {
    match (a, b) {
        (Operand::Point(p), Operand::Point(q)) => pair(*p, toward(*p, *q), *q, toward(*q, *p)),
        (Operand::Point(p), Operand::Linear(linear)) => {
            let q = linear.closest_point_to(*p);
            pair(*p, toward(*p, q), q, linear.normal)
        }
        (Operand::Point(p), Operand::Circle(circle)) => point_circle(*p, circle),
        (Operand::Point(p), Operand::Edges(edges)) => {
            let mut best = ClosestPointResult::invalid();
            for (index, edge) in edges.iter().enumerate() {
                let (q, _) = edge.closest_point_to(*p);
                let candidate = pair(*p, toward(*p, q), q, edge.normal()).with_edge_indices(None, Some(index));
                keep_closest(&mut best, candidate);
            }
            best
        }
        (Operand::Linear(a), Operand::Linear(b)) => {
            let (pa, pb, _) = closest_pair(a, b);
            pair(pa, a.normal, pb, b.normal)
        }
        (Operand::Linear(linear), Operand::Circle(circle)) => {
            let (on_linear, on_circle) = linear_circle(linear, circle);
            pair(on_linear, linear.normal, on_circle, circle.normal_at(on_circle))
        }
        (Operand::Linear(linear), Operand::Edges(edges)) => {
            let mut best = ClosestPointResult::invalid();
            for (index, edge) in edges.iter().enumerate() {
                let (pa, pb, _) = closest_pair(linear, &Linear::from_segment(edge));
                let candidate = pair(pa, linear.normal, pb, edge.normal()).with_edge_indices(None, Some(index));
                keep_closest(&mut best, candidate);
                if best.distance_squared == 0.0 {
                    break;
                }
            }
            best
        }
        (Operand::Circle(a), Operand::Circle(b)) => circle_circle(a, b),
        (Operand::Circle(circle), Operand::Edges(edges)) => {
            let mut best = ClosestPointResult::invalid();
            for (index, edge) in edges.iter().enumerate() {
                let (on_edge, on_circle) = linear_circle(&Linear::from_segment(edge), circle);
                let candidate = pair(on_circle, circle.normal_at(on_circle), on_edge, edge.normal())
                    .with_edge_indices(None, Some(index));
                keep_closest(&mut best, candidate);
                if best.distance_squared == 0.0 {
                    break;
                }
            }
            best
        }
        (Operand::Edges(a), Operand::Edges(b)) => edges_edges(a, b),
        (Operand::Linear(_), Operand::Point(_))
        | (Operand::Circle(_), Operand::Point(_) | Operand::Linear(_))
        | (Operand::Edges(_), _) => closest_operands(b, a).reversed(),
    }
}

fn pair(self_point: Vec2, self_normal: Vec2, other_point: Vec2, other_normal: Vec2) -> ClosestPointResult {
    ClosestPointResult::new(
        CollisionPoint::new(self_point, self_normal),
        CollisionPoint::new(other_point, other_normal),
        distance_squared(self_point, other_point),
    )
}

/// Normal of a point operand: from the other side's closest point toward it
fn toward(point: Vec2, from: Vec2) -> Vec2 {
    normalize_or_zero(point - from)
}

fn keep_closest(best: &mut ClosestPointResult, candidate: ClosestPointResult) {
    if candidate.is_closer_than(best) {
        *best = candidate;
    }
}

fn point_circle(point: Vec2, circle: &Circle) -> ClosestPointResult {
    let on_circle = circle.closest_point_to(point);
    // a query at the center has no reliable circle normal
    let circle_normal = if normalize_or_zero(point - circle.center) == Vec2::zeros() {
        Vec2::zeros()
    } else {
        circle.normal_at(on_circle)
    };
    pair(point, toward(point, on_circle), on_circle, circle_normal)
}

/// Closest points on a linear and on a circle boundary
fn linear_circle(linear: &Linear, circle: &Circle) -> (Vec2, Vec2) {
    let (ts, count) = circle_parameters(linear, circle);
    if let Some(&t) = ts[..count].iter().find(|&&t| linear.contains_t(t)) {
        let p = linear.point_at(t);
        return (p, p);
    }

    let nearest = linear.closest_point_to(circle.center);
    if (nearest - circle.center).norm_squared() >= circle.radius * circle.radius {
        return (nearest, circle.closest_point_to(nearest));
    }

    // wholly inside the disc: the end furthest from the center is nearest the boundary
    let (ends, count) = linear.endpoints();
    let farthest = ends[..count]
        .iter()
        .copied()
        .max_by(|a, b| {
            (a - circle.center)
                .norm_squared()
                .total_cmp(&(b - circle.center).norm_squared())
        })
        .unwrap_or(nearest);
    (farthest, circle.closest_point_to(farthest))
}

fn circle_circle(a: &Circle, b: &Circle) -> ClosestPointResult {
    let offset = b.center - a.center;
    let d = offset.norm();
    let n = match normalize_or_zero(offset) {
        n if n == Vec2::zeros() => Vec2::x(),
        n => n,
    };

    let (pa, pb) = if d > a.radius + b.radius {
        (a.center + n * a.radius, b.center - n * b.radius)
    } else if d >= (a.radius - b.radius).abs() {
        let (points, count) = circle_circle_points(a, b);
        let p = if count > 0 { points[0] } else { a.center + n * a.radius };
        (p, p)
    } else if a.radius > b.radius {
        (a.center + n * a.radius, b.center + n * b.radius)
    } else {
        (a.center - n * a.radius, b.center - n * b.radius)
    };
    pair(pa, a.normal_at(pa), pb, b.normal_at(pb))
}

fn edges_edges(a: &[Segment], b: &[Segment]) -> ClosestPointResult {
    let mut best = ClosestPointResult::invalid();
    for (i, edge_a) in a.iter().enumerate() {
        let linear_a = Linear::from_segment(edge_a);
        for (j, edge_b) in b.iter().enumerate() {
            let (pa, pb, _) = closest_pair(&linear_a, &Linear::from_segment(edge_b));
            let candidate = pair(pa, edge_a.normal(), pb, edge_b.normal()).with_edge_indices(Some(i), Some(j));
            keep_closest(&mut best, candidate);
            if best.distance_squared == 0.0 {
                return best;
            }
        }
    }
    best
}
