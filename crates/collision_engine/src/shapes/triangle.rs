//! Triangle and quad
//!
//! Both are fixed-size closed vertex loops that share the polygon helpers.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use super::polygon;
use super::rect::Rect;
use super::segment::Segment;

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex
    pub a: Vec2,
    /// Second vertex
    pub b: Vec2,
    /// Third vertex
    pub c: Vec2,
    /// Reverse the outward-normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            a,
            b,
            c,
            flipped_normals: false,
        }
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Vertices in order
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// Edge `index` (0..3) with an outward normal
    pub fn edge(&self, index: usize) -> Option<Segment> {
        let vertices = self.vertices();
        if index >= vertices.len() {
            return None;
        }
        let ccw = polygon::is_counter_clockwise(&vertices);
        Some(polygon::closed_edge(&vertices, index, ccw, self.flipped_normals))
    }

    /// All three edges with outward normals
    pub fn edges(&self) -> Vec<Segment> {
        polygon::closed_edges(&self.vertices(), self.flipped_normals)
    }

    /// Always 3
    pub fn edge_count(&self) -> usize {
        3
    }

    /// Outward normal of edge `index`
    pub fn edge_normal(&self, index: usize) -> Option<Vec2> {
        self.edge(index).map(|edge| edge.normal())
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Unsigned area
    pub fn area(&self) -> f32 {
        polygon::signed_area(&self.vertices()).abs()
    }

    /// Length of the boundary
    pub fn perimeter(&self) -> f32 {
        polygon::perimeter(&self.vertices())
    }

    /// Crossing-number containment test
    pub fn contains_point(&self, point: Vec2) -> bool {
        polygon::contains_point(&self.vertices(), point)
    }

    /// Bounding box of the vertices
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.vertices()).unwrap_or_default()
    }

    /// Move the triangle by `offset`
    pub fn translated(&self, offset: Vec2) -> Triangle {
        Triangle {
            a: self.a + offset,
            b: self.b + offset,
            c: self.c + offset,
            flipped_normals: self.flipped_normals,
        }
    }
}

/// A four-sided closed shape with arbitrary vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// First vertex
    pub a: Vec2,
    /// Second vertex
    pub b: Vec2,
    /// Third vertex
    pub c: Vec2,
    /// Fourth vertex
    pub d: Vec2,
    /// Reverse the outward-normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Quad {
    /// Creates a new quad
    pub fn new(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Self {
        Self {
            a,
            b,
            c,
            d,
            flipped_normals: false,
        }
    }

    /// Quad covering the same area as `rect`
    pub fn from_rect(rect: &Rect) -> Self {
        let [a, b, c, d] = rect.corners();
        Self::new(a, b, c, d).with_flipped_normals(rect.flipped_normals)
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Vertices in order
    pub fn vertices(&self) -> [Vec2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Edge `index` (0..4) with an outward normal
    pub fn edge(&self, index: usize) -> Option<Segment> {
        let vertices = self.vertices();
        if index >= vertices.len() {
            return None;
        }
        let ccw = polygon::is_counter_clockwise(&vertices);
        Some(polygon::closed_edge(&vertices, index, ccw, self.flipped_normals))
    }

    /// All four edges with outward normals
    pub fn edges(&self) -> Vec<Segment> {
        polygon::closed_edges(&self.vertices(), self.flipped_normals)
    }

    /// Always 4
    pub fn edge_count(&self) -> usize {
        4
    }

    /// Outward normal of edge `index`
    pub fn edge_normal(&self, index: usize) -> Option<Vec2> {
        self.edge(index).map(|edge| edge.normal())
    }

    /// Area-weighted centroid
    pub fn centroid(&self) -> Vec2 {
        polygon::centroid(&self.vertices())
    }

    /// Unsigned area
    pub fn area(&self) -> f32 {
        polygon::signed_area(&self.vertices()).abs()
    }

    /// Length of the boundary
    pub fn perimeter(&self) -> f32 {
        polygon::perimeter(&self.vertices())
    }

    /// Crossing-number containment test
    pub fn contains_point(&self, point: Vec2) -> bool {
        polygon::contains_point(&self.vertices(), point)
    }

    /// Bounding box of the vertices
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.vertices()).unwrap_or_default()
    }

    /// Move the quad by `offset`
    pub fn translated(&self, offset: Vec2) -> Quad {
        Quad {
            a: self.a + offset,
            b: self.b + offset,
            c: self.c + offset,
            d: self.d + offset,
            flipped_normals: self.flipped_normals,
        }
    }
}
