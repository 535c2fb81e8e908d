//! Closed-form intersection points
//!
//! Each hit records the surface normal of both operands at the point; the
//! public result keeps the normal of the *other* operand, the surface the
//! querying shape ran into.

use crate::foundation::math::{perpendicular_left, Vec2, EPSILON, ON_BOUNDARY_TOLERANCE};
use crate::results::{CollisionPoint, CollisionPoints};
use crate::shapes::Circle;

use super::closest::closest_operands;
use super::linear::{circle_parameters, intersection, Linear};
use super::operand::Operand;

#[derive(Debug, Clone, Copy)]
struct Hit {
    point: Vec2,
    a_normal: Vec2,
    b_normal: Vec2,
}

impl Hit {
    fn swapped(self) -> Self {
        Self {
            point: self.point,
            a_normal: self.b_normal,
            b_normal: self.a_normal,
        }
    }
}

/// Intersection points of `a` against `b`, in the order found
pub(crate) fn intersect_operands(a: &Operand<'_>, b: &Operand<'_>) -> CollisionPoints {
    hits(a, b)
        .into_iter()
        .map(|hit| CollisionPoint::new(hit.point, hit.b_normal))
        .collect()
}

fn hits(a: &Operand<'_>, b: &Operand<'_>) -> Vec<Hit> {
    let mut out = Vec::new();
    match (a, b) {
        (Operand::Point(p), other) => {
            let result = closest_operands(&Operand::Point(*p), other);
            if result.is_valid() && result.distance_squared < ON_BOUNDARY_TOLERANCE {
                out.push(Hit {
                    point: *p,
                    a_normal: Vec2::zeros(),
                    b_normal: result.other_point.normal,
                });
            }
        }
        (Operand::Linear(a), Operand::Linear(b)) => {
            if let Some(point) = intersection(a, b) {
                out.push(Hit {
                    point,
                    a_normal: a.normal,
                    b_normal: b.normal,
                });
            }
        }
        (Operand::Linear(linear), Operand::Circle(circle)) => linear_circle(linear, circle, &mut out),
        (Operand::Linear(linear), Operand::Edges(edges)) => {
            for edge in edges {
                if let Some(point) = intersection(linear, &Linear::from_segment(edge)) {
                    push_unique(
                        &mut out,
                        Hit {
                            point,
                            a_normal: linear.normal,
                            b_normal: edge.normal(),
                        },
                    );
                }
            }
        }
        (Operand::Circle(a), Operand::Circle(b)) => {
            let (points, count) = circle_circle_points(a, b);
            out.extend(points[..count].iter().map(|&point| Hit {
                point,
                a_normal: a.normal_at(point),
                b_normal: b.normal_at(point),
            }));
        }
        (Operand::Circle(circle), Operand::Edges(edges)) => {
            let mut edge_hits = Vec::new();
            for edge in edges {
                linear_circle(&Linear::from_segment(edge), circle, &mut edge_hits);
            }
            for hit in edge_hits {
                push_unique(&mut out, hit.swapped());
            }
        }
        (Operand::Edges(a), Operand::Edges(b)) => {
            for edge_a in a {
                let linear_a = Linear::from_segment(edge_a);
                for edge_b in b {
                    if let Some(point) = intersection(&linear_a, &Linear::from_segment(edge_b)) {
                        push_unique(
                            &mut out,
                            Hit {
                                point,
                                a_normal: edge_a.normal(),
                                b_normal: edge_b.normal(),
                            },
                        );
                    }
                }
            }
        }
        (_, Operand::Point(_))
        | (Operand::Circle(_), Operand::Linear(_))
        | (Operand::Edges(_), Operand::Linear(_) | Operand::Circle(_)) => {
            out.extend(hits(b, a).into_iter().map(Hit::swapped));
        }
    }
    out
}

/// Adjacent edges share a vertex; a crossing there is kept once
fn push_unique(out: &mut Vec<Hit>, hit: Hit) {
    if out
        .iter()
        .all(|seen| (seen.point - hit.point).norm_squared() >= ON_BOUNDARY_TOLERANCE)
    {
        out.push(hit);
    }
}

fn linear_circle(linear: &Linear, circle: &Circle, out: &mut Vec<Hit>) {
    let (ts, count) = circle_parameters(linear, circle);
    for &t in ts[..count].iter().filter(|&&t| linear.contains_t(t)) {
        let point = linear.point_at(t);
        out.push(Hit {
            point,
            a_normal: linear.normal,
            b_normal: circle.normal_at(point),
        });
    }
}

/// Boundary intersections of two circles
///
/// Zero points when separate, nested or concentric; one when tangent.
pub(crate) fn circle_circle_points(a: &Circle, b: &Circle) -> ([Vec2; 2], usize) {
    let none = ([Vec2::zeros(); 2], 0);
    let offset = b.center - a.center;
    let d = offset.norm();
    if d <= EPSILON || d > a.radius + b.radius || d < (a.radius - b.radius).abs() {
        return none;
    }
    let along = (a.radius * a.radius - b.radius * b.radius + d * d) / (2.0 * d);
    let h_squared = a.radius * a.radius - along * along;
    let base = a.center + offset * (along / d);
    if h_squared <= EPSILON {
        return ([base, base], 1);
    }
    let spread = perpendicular_left(offset / d) * h_squared.sqrt();
    ([base + spread, base - spread], 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Segment, Shape};
    use approx::assert_relative_eq;

    fn intersect(a: &Shape, b: &Shape) -> CollisionPoints {
        match (Operand::from_shape(a), Operand::from_shape(b)) {
            (Some(a), Some(b)) => intersect_operands(&a, &b),
            _ => CollisionPoints::new(),
        }
    }

    #[test]
    fn test_tangent_circles() {
        let (points, count) = circle_circle_points(&Circle::new(Vec2::zeros(), 5.0), &Circle::new(Vec2::new(10.0, 0.0), 5.0));
        assert_eq!(count, 1);
        assert_relative_eq!(points[0], Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_concentric_circles_have_no_points() {
        let circle = Circle::new(Vec2::new(3.0, 3.0), 5.0);
        assert_eq!(circle_circle_points(&circle, &circle).1, 0);
    }

    #[test]
    fn test_hit_carries_other_normal() {
        let horizontal = Shape::segment(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let vertical = Shape::Segment(Segment::new(Vec2::new(5.0, -5.0), Vec2::new(5.0, 5.0)));
        let points = intersect(&horizontal, &vertical);
        assert_eq!(points.len(), 1);
        let hit = points.first().unwrap();
        assert_relative_eq!(hit.point, Vec2::new(5.0, 0.0));
        // the vertical segment's right-hand normal
        assert_relative_eq!(hit.normal, Vec2::new(1.0, 0.0));

        let reversed = intersect(&vertical, &horizontal);
        assert_relative_eq!(reversed.first().unwrap().normal, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_circle_against_rect_edges() {
        let circle = Shape::circle(Vec2::new(0.0, 5.0), 2.0);
        let rect = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let points = intersect(&circle, &rect);
        assert_eq!(points.len(), 2);
        for p in &points {
            assert_relative_eq!(p.point.x, 0.0, epsilon = 1e-5);
            // left edge faces outward
            assert_relative_eq!(p.normal, Vec2::new(-1.0, 0.0));
        }
    }

    #[test]
    fn test_point_on_boundary() {
        let rect = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let on_edge = intersect(&Shape::Point(Vec2::new(10.0, 5.0)), &rect);
        assert_eq!(on_edge.len(), 1);
        assert_relative_eq!(on_edge.first().unwrap().normal, Vec2::new(1.0, 0.0));
        assert!(intersect(&Shape::Point(Vec2::new(5.0, 5.0)), &rect).is_empty());
    }

    #[test]
    fn test_vertex_crossing_reported_once() {
        let rect = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let diagonal = Shape::segment(Vec2::new(-5.0, -5.0), Vec2::new(15.0, 15.0));
        for points in [intersect(&diagonal, &rect), intersect(&rect, &diagonal)] {
            assert_eq!(points.len(), 2);
            assert_relative_eq!(points.average().point, Vec2::new(5.0, 5.0), epsilon = 1e-4);
        }

        let wedge = Shape::polygon(vec![Vec2::new(-5.0, -5.0), Vec2::new(15.0, 15.0), Vec2::new(-5.0, 15.0)]);
        assert_eq!(intersect(&wedge, &rect).len(), 2);
    }
}
