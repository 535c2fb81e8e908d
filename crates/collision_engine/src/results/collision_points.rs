//! Ordered, growable collection of collision points

use serde::{Deserialize, Serialize};

use crate::foundation::math::{normalize_or_zero, Vec2};
use super::collision_point::CollisionPoint;

/// Intersection points in the order they were found
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionPoints {
    points: Vec<CollisionPoint>,
}

impl CollisionPoints {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn push(&mut self, point: CollisionPoint) {
        self.points.push(point);
    }

    /// Append every point of `other`
    pub fn extend(&mut self, other: CollisionPoints) {
        self.points.extend(other.points);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in order
    pub fn iter(&self) -> std::slice::Iter<'_, CollisionPoint> {
        self.points.iter()
    }

    /// Point at `index`
    pub fn get(&self, index: usize) -> Option<&CollisionPoint> {
        self.points.get(index)
    }

    /// First point found
    pub fn first(&self) -> Option<&CollisionPoint> {
        self.points.first()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[CollisionPoint] {
        &self.points
    }

    /// `None` when empty, otherwise `Some(self)`
    pub fn into_option(self) -> Option<CollisionPoints> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Valid point closest to `reference`
    pub fn closest_to(&self, reference: Vec2) -> Option<CollisionPoint> {
        self.points
            .iter()
            .filter(|p| p.is_valid())
            .min_by(|a, b| a.distance_squared_to(reference).total_cmp(&b.distance_squared_to(reference)))
            .copied()
    }

    /// Valid point furthest from `reference`
    pub fn furthest_from(&self, reference: Vec2) -> Option<CollisionPoint> {
        self.points
            .iter()
            .filter(|p| p.is_valid())
            .max_by(|a, b| a.distance_squared_to(reference).total_cmp(&b.distance_squared_to(reference)))
            .copied()
    }

    /// Average location and normalized average normal of the valid points
    pub fn average(&self) -> CollisionPoint {
        let mut count = 0usize;
        let mut point_sum = Vec2::zeros();
        let mut normal_sum = Vec2::zeros();
        for p in self.points.iter().filter(|p| p.is_valid()) {
            count += 1;
            point_sum += p.point;
            normal_sum += p.normal;
        }
        if count == 0 {
            return CollisionPoint::invalid();
        }
        CollisionPoint::new(point_sum / count as f32, normalize_or_zero(normal_sum))
    }

    /// Sort so the point closest to `reference` comes first
    pub fn sort_by_distance(&mut self, reference: Vec2) {
        self.points.sort_by(|a, b| {
            a.distance_squared_to(reference).total_cmp(&b.distance_squared_to(reference))
        });
    }

    /// Drop every invalid point
    pub fn retain_valid(&mut self) {
        self.points.retain(CollisionPoint::is_valid);
    }

    /// Keep only points whose normal faces `reference`
    pub fn retain_facing(&mut self, reference: Vec2) {
        self.points.retain(|p| p.is_facing(reference));
    }

    /// Reverse every normal
    pub fn flip_normals(&mut self) {
        for p in &mut self.points {
            p.normal = -p.normal;
        }
    }
}

impl From<Vec<CollisionPoint>> for CollisionPoints {
    fn from(points: Vec<CollisionPoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<CollisionPoint> for CollisionPoints {
    fn from_iter<I: IntoIterator<Item = CollisionPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CollisionPoints {
    type Item = CollisionPoint;
    type IntoIter = std::vec::IntoIter<CollisionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a CollisionPoints {
    type Item = &'a CollisionPoint;
    type IntoIter = std::slice::Iter<'a, CollisionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
