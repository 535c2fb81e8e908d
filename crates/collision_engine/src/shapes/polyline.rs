//! Open chain of connected segments

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use super::polygon;
use super::rect::Rect;
use super::segment::Segment;

/// An open polyline; consecutive points are joined by segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    /// Points in order
    pub points: Vec<Vec2>,
    /// Reverse the normal convention of every segment
    #[serde(default)]
    pub flipped_normals: bool,
}

impl Polyline {
    /// Create a polyline from its points
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            flipped_normals: false,
        }
    }

    /// Builder-style normal flip
    pub fn with_flipped_normals(mut self, flipped: bool) -> Self {
        self.flipped_normals = flipped;
        self
    }

    /// A polyline needs at least two points
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Points in order
    pub fn vertices(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of segments
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Segment `index`
    pub fn edge(&self, index: usize) -> Option<Segment> {
        if index >= self.edge_count() {
            return None;
        }
        Some(
            Segment::new(self.points[index], self.points[index + 1])
                .with_flipped_normals(self.flipped_normals),
        )
    }

    /// All segments in order
    pub fn edges(&self) -> Vec<Segment> {
        (0..self.edge_count()).filter_map(|i| self.edge(i)).collect()
    }

    /// Total length
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Average of the points
    pub fn center(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::zeros();
        }
        let sum: Vec2 = self.points.iter().sum();
        sum / self.points.len() as f32
    }

    /// Bounding box of the points
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.points.iter().copied()).unwrap_or_default()
    }

    /// Move every point by `offset`
    pub fn translated(&self, offset: Vec2) -> Polyline {
        Polyline {
            points: self.points.iter().map(|p| p + offset).collect(),
            flipped_normals: self.flipped_normals,
        }
    }

    /// Closest point on the chain to `point` and the winning segment index
    pub fn closest_point_to(&self, point: Vec2) -> Option<(Vec2, usize)> {
        if !self.is_valid() {
            return None;
        }
        Some(polygon::closest_boundary_point(&self.edges(), point))
    }
}
