//! Parametric form shared by segments, rays and lines
//!
//! All three are `origin + direction * t` with a different admissible range
//! for `t`: `[0, 1]` for segments (direction is the full displacement),
//! `[0, inf)` for rays and `(-inf, inf)` for lines.

use crate::foundation::math::{cross, Vec2, EPSILON};
use crate::shapes::{Circle, Line, Ray, Segment};

/// Which parameter range a [`Linear`] admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinearKind {
    Segment,
    Ray,
    Line,
}

/// A segment, ray or line in parametric form with its normal
#[derive(Debug, Clone, Copy)]
pub(crate) struct Linear {
    pub kind: LinearKind,
    pub origin: Vec2,
    pub direction: Vec2,
    pub normal: Vec2,
}

impl Linear {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            kind: LinearKind::Segment,
            origin: segment.start,
            direction: segment.displacement(),
            normal: segment.normal(),
        }
    }

    pub fn from_ray(ray: &Ray) -> Self {
        Self {
            kind: LinearKind::Ray,
            origin: ray.origin,
            direction: ray.direction,
            normal: ray.normal(),
        }
    }

    pub fn from_line(line: &Line) -> Self {
        Self {
            kind: LinearKind::Line,
            origin: line.point,
            direction: line.direction,
            normal: line.normal(),
        }
    }

    /// Admissible parameter range
    pub fn range(&self) -> (f32, f32) {
        match self.kind {
            LinearKind::Segment => (0.0, 1.0),
            LinearKind::Ray => (0.0, f32::INFINITY),
            LinearKind::Line => (f32::NEG_INFINITY, f32::INFINITY),
        }
    }

    pub fn contains_t(&self, t: f32) -> bool {
        let (min, max) = self.range();
        t >= min && t <= max
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// Zero-length segments behave as points
    pub fn is_degenerate(&self) -> bool {
        self.direction.norm_squared() <= EPSILON
    }

    /// Bounded ends: both for a segment, the origin for a ray, none for a line
    pub fn endpoints(&self) -> ([Vec2; 2], usize) {
        match self.kind {
            LinearKind::Segment => ([self.origin, self.origin + self.direction], 2),
            LinearKind::Ray => ([self.origin, self.origin], 1),
            LinearKind::Line => ([self.origin, self.origin], 0),
        }
    }

    /// Closest point to `point` within the admissible range
    pub fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let length_squared = self.direction.norm_squared();
        if length_squared <= EPSILON {
            return self.origin;
        }
        let (min, max) = self.range();
        let t = ((point - self.origin).dot(&self.direction) / length_squared).clamp(min, max);
        self.point_at(t)
    }
}

/// Solve the 2x2 parametric system for `(t, u)`
///
/// Returns `None` for near-parallel directions (determinant below
/// `EPSILON`), even when the two are collinear and overlapping.
pub(crate) fn solve(a: &Linear, b: &Linear) -> Option<(f32, f32)> {
    let determinant = cross(a.direction, b.direction);
    if determinant.abs() < EPSILON {
        return None;
    }
    let diff = b.origin - a.origin;
    let t = cross(diff, b.direction) / determinant;
    let u = cross(diff, a.direction) / determinant;
    Some((t, u))
}

/// Intersection point of two linears, if both parameters are admissible
pub(crate) fn intersection(a: &Linear, b: &Linear) -> Option<Vec2> {
    let (t, u) = solve(a, b)?;
    if a.contains_t(t) && b.contains_t(u) {
        Some(a.point_at(t))
    } else {
        None
    }
}

/// Boolean overlap, including collinear overlap of parallel linears
pub(crate) fn overlaps(a: &Linear, b: &Linear) -> bool {
    if a.is_degenerate() {
        return (b.closest_point_to(a.origin) - a.origin).norm_squared() <= EPSILON;
    }
    if b.is_degenerate() {
        return (a.closest_point_to(b.origin) - b.origin).norm_squared() <= EPSILON;
    }
    match solve(a, b) {
        Some((t, u)) => a.contains_t(t) && b.contains_t(u),
        None => collinear_overlap(a, b),
    }
}

/// Parallel linears overlap when they are collinear and their ranges meet
fn collinear_overlap(a: &Linear, b: &Linear) -> bool {
    let diff = b.origin - a.origin;
    let scale = a.direction.norm() * diff.norm().max(1.0);
    if cross(diff, a.direction).abs() > EPSILON.max(1e-6 * scale) {
        return false;
    }
    // b's range expressed in a's parameter
    let length_squared = a.direction.norm_squared();
    let to_a = |p: Vec2| (p - a.origin).dot(&a.direction) / length_squared;
    let (b_min, b_max) = b.range();
    let start = if b_min.is_finite() { to_a(b.point_at(b_min)) } else { f32::NEG_INFINITY };
    let end = if b_max.is_finite() { to_a(b.point_at(b_max)) } else { f32::INFINITY };
    let same_direction = a.direction.dot(&b.direction) >= 0.0;
    let (lo, hi) = match (same_direction, b.kind) {
        (_, LinearKind::Line) => (f32::NEG_INFINITY, f32::INFINITY),
        (true, LinearKind::Ray) => (start, f32::INFINITY),
        (false, LinearKind::Ray) => (f32::NEG_INFINITY, start),
        (_, LinearKind::Segment) => (start.min(end), start.max(end)),
    };
    let (a_min, a_max) = a.range();
    lo <= a_max && hi >= a_min
}

/// Closest point pair between two linears and their squared distance
///
/// Intersecting linears meet at distance zero. Otherwise the minimum is
/// attained at a bounded end of one of them; two parallel lines fall back
/// to projecting an origin.
pub(crate) fn closest_pair(a: &Linear, b: &Linear) -> (Vec2, Vec2, f32) {
    if !a.is_degenerate() && !b.is_degenerate() {
        if let Some(p) = intersection(a, b) {
            return (p, p, 0.0);
        }
    }

    let mut best: Option<(Vec2, Vec2, f32)> = None;
    let mut consider = |pa: Vec2, pb: Vec2| {
        let distance = (pa - pb).norm_squared();
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((pa, pb, distance));
        }
    };

    let (ends, count) = a.endpoints();
    for &end in &ends[..count] {
        consider(end, b.closest_point_to(end));
    }
    let (ends, count) = b.endpoints();
    for &end in &ends[..count] {
        consider(a.closest_point_to(end), end);
    }
    if count == 0 && a.kind == LinearKind::Line {
        consider(a.origin, b.closest_point_to(a.origin));
    }

    best.unwrap_or((a.origin, b.origin, (a.origin - b.origin).norm_squared()))
}

/// Parameters along `linear` where its infinite carrier meets the circle
///
/// Projects the center onto the carrier and solves for the half chord.
/// Returns zero, one (tangent) or two parameters, unfiltered by range.
pub(crate) fn circle_parameters(linear: &Linear, circle: &Circle) -> ([f32; 2], usize) {
    let length_squared = linear.direction.norm_squared();
    if length_squared <= EPSILON {
        return ([0.0; 2], 0);
    }
    let t0 = (circle.center - linear.origin).dot(&linear.direction) / length_squared;
    let foot = linear.point_at(t0);
    let h_squared = circle.radius * circle.radius - (circle.center - foot).norm_squared();
    if h_squared < 0.0 {
        return ([0.0; 2], 0);
    }
    if h_squared <= EPSILON {
        return ([t0, t0], 1);
    }
    let dt = h_squared.sqrt() / length_squared.sqrt();
    ([t0 - dt, t0 + dt], 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> Linear {
        Linear::from_segment(&Segment::new(Vec2::new(ax, ay), Vec2::new(bx, by)))
    }

    #[test]
    fn test_segment_intersection() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert_relative_eq!(intersection(&a, &b).unwrap(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert!(intersection(&a, &b).is_none());
        // collinear overlap still counts as overlap
        assert!(overlaps(&a, &b));
        assert!(!overlaps(&a, &seg(11.0, 0.0, 15.0, 0.0)));
        assert!(!overlaps(&a, &seg(0.0, 1.0, 10.0, 1.0)));
    }

    #[test]
    fn test_ray_range() {
        let ray = Linear::from_ray(&Ray::new(Vec2::zeros(), Vec2::new(1.0, 0.0)));
        let behind = seg(-5.0, -1.0, -5.0, 1.0);
        let ahead = seg(5.0, -1.0, 5.0, 1.0);
        assert!(intersection(&ray, &behind).is_none());
        assert_relative_eq!(intersection(&ray, &ahead).unwrap(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_line_range_is_unbounded() {
        let line = Linear::from_line(&Line::new(Vec2::zeros(), Vec2::new(1.0, 0.0)));
        let far_behind = seg(-500.0, -1.0, -500.0, 1.0);
        assert_relative_eq!(intersection(&line, &far_behind).unwrap(), Vec2::new(-500.0, 0.0));
    }

    #[test]
    fn test_closest_pair_uses_endpoints() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(12.0, 3.0, 12.0, 10.0);
        let (pa, pb, d) = closest_pair(&a, &b);
        assert_relative_eq!(pa, Vec2::new(10.0, 0.0));
        assert_relative_eq!(pb, Vec2::new(12.0, 3.0));
        assert_relative_eq!(d, 13.0);
    }

    #[test]
    fn test_closest_pair_parallel_lines() {
        let a = Linear::from_line(&Line::new(Vec2::zeros(), Vec2::new(1.0, 0.0)));
        let b = Linear::from_line(&Line::new(Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.0)));
        let (_, _, d) = closest_pair(&a, &b);
        assert_relative_eq!(d, 16.0);
    }

    #[test]
    fn test_circle_parameters() {
        let a = seg(0.0, 0.0, 100.0, 0.0);
        let circle = Circle::new(Vec2::new(50.0, 0.0), 10.0);
        let (ts, count) = circle_parameters(&a, &circle);
        assert_eq!(count, 2);
        assert_relative_eq!(ts[0], 0.4, epsilon = 1e-6);
        assert_relative_eq!(ts[1], 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_segment_overlap() {
        let point_like = seg(5.0, 0.0, 5.0, 0.0);
        assert!(overlaps(&point_like, &seg(0.0, 0.0, 10.0, 0.0)));
        assert!(!overlaps(&point_like, &seg(0.0, 1.0, 10.0, 1.0)));
    }
}
