//! Closed polygon plus the vertex-list helpers shared by every edge shape
//!
//! Triangles, quads and rects are stored as fixed vertex arrays but reuse the
//! functions here for winding, containment and edge construction.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{constants, Vec2, EPSILON};
use super::rect::Rect;
use super::segment::Segment;

/// Signed area of a closed vertex loop (positive when counter-clockwise, y up)
pub(crate) fn signed_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area * 0.5
}

/// Winding of a closed vertex loop; degenerate loops count as counter-clockwise
pub(crate) fn is_counter_clockwise(points: &[Vec2]) -> bool {
    signed_area(points) >= 0.0
}

/// Edge `index` of a closed loop, oriented so `Segment::normal` points outward
pub(crate) fn closed_edge(points: &[Vec2], index: usize, ccw: bool, flipped: bool) -> Segment {
    let start = points[index];
    let end = points[(index + 1) % points.len()];
    // ccw loops already have the outward side on the right of each edge
    Segment::new(start, end).with_flipped_normals(flipped != !ccw)
}

/// Every edge of a closed loop with outward normals
pub(crate) fn closed_edges(points: &[Vec2], flipped: bool) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let ccw = is_counter_clockwise(points);
    (0..points.len())
        .map(|i| closed_edge(points, i, ccw, flipped))
        .collect()
}

/// Crossing-number point containment for a closed loop
pub(crate) fn contains_point(points: &[Vec2], point: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let pi = points[i];
        let pj = points[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Area-weighted centroid, falling back to the vertex average for flat loops
pub(crate) fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::zeros();
    }
    let area = signed_area(points);
    if area.abs() <= EPSILON {
        let sum: Vec2 = points.iter().sum();
        return sum / points.len() as f32;
    }
    let mut c = Vec2::zeros();
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let f = a.x * b.y - b.x * a.y;
        c += (a + b) * f;
    }
    c / (6.0 * area)
}

/// Perimeter of a closed loop
pub(crate) fn perimeter(points: &[Vec2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    (0..points.len())
        .map(|i| (points[(i + 1) % points.len()] - points[i]).norm())
        .sum()
}

/// Closest point over a set of edges and the index of the winning edge
///
/// Ties keep the first edge found.
pub(crate) fn closest_boundary_point(edges: &[Segment], point: Vec2) -> (Vec2, usize) {
    let mut best = (point, 0);
    let mut best_distance = f32::INFINITY;
    for (index, edge) in edges.iter().enumerate() {
        let (candidate, _) = edge.closest_point_to(point);
        let distance = (candidate - point).norm_squared();
        if distance < best_distance {
            best_distance = distance;
            best = (candidate, index);
        }
    }
    best
}

/// A closed polygon with an arbitrary number of vertices
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in order; the last connects back to the first
    pub points: Vec<Vec2>,
    /// Reverse the outward-normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Polygon {
    /// Create a polygon from its vertices
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            flipped_normals: false,
        }
    }

    /// Regular polygon with `sides` vertices on a circle
    pub fn regular(center: Vec2, radius: f32, sides: usize, rotation: f32) -> Self {
        let sides = sides.max(3);
        let step = constants::TAU / sides as f32;
        let points = (0..sides)
            .map(|i| {
                let angle = rotation + step * i as f32;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Self::new(points)
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// A polygon needs at least three vertices
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Vertices in order
    pub fn vertices(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of edges, zero for an invalid polygon
    pub fn edge_count(&self) -> usize {
        if self.is_valid() {
            self.points.len()
        } else {
            0
        }
    }

    /// Edge `index` with an outward normal
    pub fn edge(&self, index: usize) -> Option<Segment> {
        if index >= self.edge_count() {
            return None;
        }
        let ccw = is_counter_clockwise(&self.points);
        Some(closed_edge(&self.points, index, ccw, self.flipped_normals))
    }

    /// All edges with outward normals, empty for an invalid polygon
    pub fn edges(&self) -> Vec<Segment> {
        if !self.is_valid() {
            return Vec::new();
        }
        closed_edges(&self.points, self.flipped_normals)
    }

    /// Outward normal of edge `index`
    pub fn edge_normal(&self, index: usize) -> Option<Vec2> {
        self.edge(index).map(|edge| edge.normal())
    }

    /// Whether the vertices wind counter-clockwise (y up)
    pub fn is_counter_clockwise(&self) -> bool {
        is_counter_clockwise(&self.points)
    }

    /// Unsigned area
    pub fn area(&self) -> f32 {
        signed_area(&self.points).abs()
    }

    /// Length of the closed boundary
    pub fn perimeter(&self) -> f32 {
        if self.is_valid() {
            perimeter(&self.points)
        } else {
            0.0
        }
    }

    /// Area-weighted centroid
    pub fn centroid(&self) -> Vec2 {
        centroid(&self.points)
    }

    /// Crossing-number containment test
    pub fn contains_point(&self, point: Vec2) -> bool {
        contains_point(&self.points, point)
    }

    /// Bounding box of the vertices
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.points.iter().copied()).unwrap_or_default()
    }

    /// Move every vertex by `offset`
    pub fn translated(&self, offset: Vec2) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| p + offset).collect(),
            flipped_normals: self.flipped_normals,
        }
    }

    /// Closest boundary point to `point` and the winning edge index
    pub fn closest_boundary_point(&self, point: Vec2) -> Option<(Vec2, usize)> {
        if !self.is_valid() {
            return None;
        }
        Some(closest_boundary_point(&self.edges(), point))
    }
}
