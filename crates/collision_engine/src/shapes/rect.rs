//! Axis-aligned rectangle
//!
//! Doubles as the bounding box type of every other shape and as the covering
//! area of the spatial grid.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use super::polygon;
use super::segment::Segment;

/// An axis-aligned rectangle described by its minimum corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x coordinate
    pub x: f32,
    /// Minimum y coordinate
    pub y: f32,
    /// Extent along x (non-negative)
    pub width: f32,
    /// Extent along y (non-negative)
    pub height: f32,
    /// Reverse the outward-normal convention
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Rect {
    /// Create a rectangle from its minimum corner and size
    ///
    /// Negative sizes are folded so that `(x, y)` is always the minimum corner.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self {
            x,
            y,
            width,
            height,
            flipped_normals: false,
        }
    }

    /// Create a rectangle spanning two corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Create a rectangle centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
    }

    /// Smallest rectangle containing every point, `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_min_max(min, max))
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Corners in counter-clockwise order (y up), starting at the minimum corner
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }

    /// Rectangles with zero area cannot contain anything
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Area of the rectangle
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Perimeter of the rectangle
    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }

    /// Inclusive point containment
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }

    /// Inclusive overlap test between two rectangles
    pub fn overlaps_rect(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.x <= b_max.x && other.x <= a_max.x && self.y <= b_max.y && other.y <= a_max.y
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        let min = self.min().inf(&other.min());
        let max = self.max().sup(&other.max());
        Rect::from_min_max(min, max)
    }

    /// Grow the rectangle by `amount` on every side
    pub fn enlarged(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Move the rectangle by `offset`
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Edge `index` (0..4) with an outward normal
    pub fn edge(&self, index: usize) -> Option<Segment> {
        let corners = self.corners();
        if index >= corners.len() {
            return None;
        }
        Some(polygon::closed_edge(&corners, index, true, self.flipped_normals))
    }

    /// All four edges with outward normals
    pub fn edges(&self) -> Vec<Segment> {
        polygon::closed_edges(&self.corners(), self.flipped_normals)
    }

    /// Same as [`corners`](Self::corners)
    pub fn vertices(&self) -> [Vec2; 4] {
        self.corners()
    }

    /// Always 4
    pub fn edge_count(&self) -> usize {
        4
    }

    /// Outward normal of edge `index`
    pub fn edge_normal(&self, index: usize) -> Option<Vec2> {
        self.edge(index).map(|edge| edge.normal())
    }

    /// Same as [`center`](Self::center)
    pub fn centroid(&self) -> Vec2 {
        self.center()
    }

    /// Closest point on the rectangle boundary to `point`
    pub fn closest_boundary_point(&self, point: Vec2) -> (Vec2, usize) {
        polygon::closest_boundary_point(&self.edges(), point)
    }
}
