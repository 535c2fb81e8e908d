//! Shape primitives
//!
//! Every collider owns exactly one [`Shape`], a closed sum type over the
//! supported primitives. Each variant stores only its defining geometry plus
//! a `flipped_normals` flag. Open shapes (segment, ray, line, polyline) put
//! their normal right of their direction; closed shapes point it outward.

mod circle;
pub(crate) mod polygon;
mod polyline;
mod ray;
mod rect;
mod segment;
mod transform;
mod triangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use ray::{Line, Ray};
pub use rect::Rect;
pub use segment::Segment;
pub use transform::Transform2D;
pub use triangle::{Quad, Triangle};

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Discriminant of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A single point
    Point,
    /// A finite segment
    Segment,
    /// A half-infinite ray
    Ray,
    /// An infinite line
    Line,
    /// A circle
    Circle,
    /// A triangle
    Triangle,
    /// An axis-aligned rectangle
    Rect,
    /// A four-sided polygon
    Quad,
    /// A closed polygon
    Polygon,
    /// An open chain of segments
    Polyline,
}

/// Collision shape of a collider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A single point
    Point(Vec2),
    /// A finite segment
    Segment(Segment),
    /// A half-infinite ray
    Ray(Ray),
    /// An infinite line
    Line(Line),
    /// A circle
    Circle(Circle),
    /// A triangle
    Triangle(Triangle),
    /// An axis-aligned rectangle
    Rect(Rect),
    /// A four-sided polygon
    Quad(Quad),
    /// A closed polygon
    Polygon(Polygon),
    /// An open chain of segments
    Polyline(Polyline),
}

impl Shape {
    /// Creates a circle shape
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle(Circle::new(center, radius))
    }

    /// Creates a segment shape
    pub fn segment(start: Vec2, end: Vec2) -> Self {
        Self::Segment(Segment::new(start, end))
    }

    /// Creates a rectangle shape
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Rect(Rect::new(x, y, width, height))
    }

    /// Creates a polygon shape
    pub fn polygon(points: Vec<Vec2>) -> Self {
        Self::Polygon(Polygon::new(points))
    }

    /// The discriminant of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Ray(_) => ShapeKind::Ray,
            Self::Line(_) => ShapeKind::Line,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Rect(_) => ShapeKind::Rect,
            Self::Quad(_) => ShapeKind::Quad,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Polyline(_) => ShapeKind::Polyline,
        }
    }

    /// Closed shapes enclose an area and support containment
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Self::Circle(_) | Self::Triangle(_) | Self::Rect(_) | Self::Quad(_) | Self::Polygon(_)
        )
    }

    /// Invalid shapes never produce results
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Ray(ray) => ray.is_valid(),
            Self::Line(line) => line.is_valid(),
            Self::Polygon(polygon) => polygon.is_valid(),
            Self::Polyline(polyline) => polyline.is_valid(),
            Self::Rect(rect) => rect.is_valid(),
            _ => true,
        }
    }

    /// Whether normals are flipped
    pub fn flipped_normals(&self) -> bool {
        match self {
            Self::Point(_) => false,
            Self::Segment(s) => s.flipped_normals,
            Self::Ray(r) => r.flipped_normals,
            Self::Line(l) => l.flipped_normals,
            Self::Circle(c) => c.flipped_normals,
            Self::Triangle(t) => t.flipped_normals,
            Self::Rect(r) => r.flipped_normals,
            Self::Quad(q) => q.flipped_normals,
            Self::Polygon(p) => p.flipped_normals,
            Self::Polyline(p) => p.flipped_normals,
        }
    }

    /// Set the normal convention; points have no normal and ignore this
    pub fn set_flipped_normals(&mut self, flipped: bool) {
        match self {
            Self::Point(_) => {}
            Self::Segment(s) => s.flipped_normals = flipped,
            Self::Ray(r) => r.flipped_normals = flipped,
            Self::Line(l) => l.flipped_normals = flipped,
            Self::Circle(c) => c.flipped_normals = flipped,
            Self::Triangle(t) => t.flipped_normals = flipped,
            Self::Rect(r) => r.flipped_normals = flipped,
            Self::Quad(q) => q.flipped_normals = flipped,
            Self::Polygon(p) => p.flipped_normals = flipped,
            Self::Polyline(p) => p.flipped_normals = flipped,
        }
    }

    /// Representative center of the shape
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Point(p) => *p,
            Self::Segment(s) => s.center(),
            Self::Ray(r) => r.origin,
            Self::Line(l) => l.point,
            Self::Circle(c) => c.center,
            Self::Triangle(t) => t.centroid(),
            Self::Rect(r) => r.center(),
            Self::Quad(q) => q.centroid(),
            Self::Polygon(p) => p.centroid(),
            Self::Polyline(p) => p.center(),
        }
    }

    /// The vertex used by containment checks against this shape
    pub fn reference_point(&self) -> Vec2 {
        match self {
            Self::Point(p) => *p,
            Self::Segment(s) => s.start,
            Self::Ray(r) => r.origin,
            Self::Line(l) => l.point,
            Self::Circle(c) => c.center,
            Self::Triangle(t) => t.a,
            Self::Rect(r) => r.min(),
            Self::Quad(q) => q.a,
            Self::Polygon(p) => p.points.first().copied().unwrap_or_else(Vec2::zeros),
            Self::Polyline(p) => p.points.first().copied().unwrap_or_else(Vec2::zeros),
        }
    }

    /// Axis-aligned bounding box (finite even for rays and lines)
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Point(p) => Rect::new(p.x, p.y, 0.0, 0.0),
            Self::Segment(s) => s.bounding_box(),
            Self::Ray(r) => r.bounding_box(),
            Self::Line(l) => l.bounding_box(),
            Self::Circle(c) => c.bounding_box(),
            Self::Triangle(t) => t.bounding_box(),
            Self::Rect(r) => Rect { flipped_normals: false, ..*r },
            Self::Quad(q) => q.bounding_box(),
            Self::Polygon(p) => p.bounding_box(),
            Self::Polyline(p) => p.bounding_box(),
        }
    }

    /// Circle enclosing the shape, centered on [`Shape::center`]
    pub fn bounding_circle(&self) -> Circle {
        match self {
            Self::Point(p) => Circle::new(*p, 0.0),
            Self::Circle(c) => Circle { flipped_normals: false, ..*c },
            Self::Segment(s) => Circle::new(s.center(), s.length() * 0.5),
            Self::Ray(_) | Self::Line(_) => {
                let bounds = self.bounding_box();
                Circle::new(bounds.center(), bounds.size().norm() * 0.5)
            }
            Self::Triangle(t) => Circle::enclosing(t.centroid(), &t.vertices()),
            Self::Rect(r) => Circle::enclosing(r.center(), &r.corners()),
            Self::Quad(q) => Circle::enclosing(q.centroid(), &q.vertices()),
            Self::Polygon(p) => Circle::enclosing(p.centroid(), &p.points),
            Self::Polyline(p) => Circle::enclosing(p.center(), &p.points),
        }
    }

    /// Point containment; open shapes contain nothing
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(c) => c.contains_point(point),
            Self::Triangle(t) => t.contains_point(point),
            Self::Rect(r) => r.contains_point(point),
            Self::Quad(q) => q.contains_point(point),
            Self::Polygon(p) => p.contains_point(point),
            _ => false,
        }
    }

    /// Edges of multi-edge shapes, empty for every other variant
    pub fn edges(&self) -> Vec<Segment> {
        match self {
            Self::Triangle(t) => t.edges(),
            Self::Rect(r) => r.edges(),
            Self::Quad(q) => q.edges(),
            Self::Polygon(p) => p.edges(),
            Self::Polyline(p) => p.edges(),
            _ => Vec::new(),
        }
    }

    /// Area enclosed by closed shapes, zero for open ones
    pub fn area(&self) -> f32 {
        match self {
            Self::Circle(c) => c.area(),
            Self::Triangle(t) => t.area(),
            Self::Rect(r) => r.area(),
            Self::Quad(q) => q.area(),
            Self::Polygon(p) => p.area(),
            _ => 0.0,
        }
    }

    /// Move the shape by `offset`
    pub fn translated(&self, offset: Vec2) -> Shape {
        match self {
            Self::Point(p) => Self::Point(p + offset),
            Self::Segment(s) => Self::Segment(s.translated(offset)),
            Self::Ray(r) => Self::Ray(Ray { origin: r.origin + offset, ..*r }),
            Self::Line(l) => Self::Line(Line { point: l.point + offset, ..*l }),
            Self::Circle(c) => Self::Circle(c.translated(offset)),
            Self::Triangle(t) => Self::Triangle(t.translated(offset)),
            Self::Rect(r) => Self::Rect(r.translated(offset)),
            Self::Quad(q) => Self::Quad(q.translated(offset)),
            Self::Polygon(p) => Self::Polygon(p.translated(offset)),
            Self::Polyline(p) => Self::Polyline(p.translated(offset)),
        }
    }

    /// Map a local-space shape into world space
    ///
    /// A rotated rectangle becomes a [`Quad`].
    pub fn transformed(&self, transform: &Transform2D) -> Shape {
        let apply = |p: Vec2| transform.apply(p);
        // a negative scale mirrors points, so directions must follow
        let direct = |d: Vec2| transform.apply_direction(d * transform.scale.signum());
        match self {
            Self::Point(p) => Self::Point(apply(*p)),
            Self::Segment(s) => Self::Segment(Segment {
                start: apply(s.start),
                end: apply(s.end),
                ..*s
            }),
            Self::Ray(r) => Self::Ray(
                Ray::new(apply(r.origin), direct(r.direction))
                    .with_flipped_normals(r.flipped_normals),
            ),
            Self::Line(l) => Self::Line(
                Line::new(apply(l.point), direct(l.direction))
                    .with_flipped_normals(l.flipped_normals),
            ),
            Self::Circle(c) => Self::Circle(
                Circle::new(apply(c.center), c.radius * transform.scale.abs())
                    .with_flipped_normals(c.flipped_normals),
            ),
            Self::Triangle(t) => Self::Triangle(Triangle {
                a: apply(t.a),
                b: apply(t.b),
                c: apply(t.c),
                ..*t
            }),
            Self::Rect(r) => {
                let [a, b, c, d] = r.corners().map(apply);
                if transform.is_axis_aligned() {
                    let rect = Rect::from_points([a, c]).unwrap_or_default();
                    Self::Rect(rect.with_flipped_normals(r.flipped_normals))
                } else {
                    Self::Quad(Quad::new(a, b, c, d).with_flipped_normals(r.flipped_normals))
                }
            }
            Self::Quad(q) => Self::Quad(Quad {
                a: apply(q.a),
                b: apply(q.b),
                c: apply(q.c),
                d: apply(q.d),
                ..*q
            }),
            Self::Polygon(p) => Self::Polygon(Polygon {
                points: p.points.iter().copied().map(apply).collect(),
                flipped_normals: p.flipped_normals,
            }),
            Self::Polyline(p) => Self::Polyline(Polyline {
                points: p.points.iter().copied().map(apply).collect(),
                flipped_normals: p.flipped_normals,
            }),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_shape! {
    Point => Vec2,
    Segment => Segment,
    Ray => Ray,
    Line => Line,
    Circle => Circle,
    Triangle => Triangle,
    Rect => Rect,
    Quad => Quad,
    Polygon => Polygon,
    Polyline => Polyline,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kind_and_closed() {
        let circle = Shape::circle(Vec2::zeros(), 1.0);
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert!(circle.is_closed());
        assert!(!Shape::segment(Vec2::zeros(), Vec2::x()).is_closed());
    }

    #[test]
    fn test_rotated_rect_becomes_quad() {
        let rect = Shape::rect(-1.0, -1.0, 2.0, 2.0);
        let rotated = rect.transformed(&Transform2D::from_position_rotation(Vec2::new(5.0, 0.0), std::f32::consts::FRAC_PI_4));
        assert_eq!(rotated.kind(), ShapeKind::Quad);
        assert_relative_eq!(rotated.center(), Vec2::new(5.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(rotated.area(), 4.0, epsilon = 1e-4);

        let moved = rect.transformed(&Transform2D::from_position(Vec2::new(5.0, 0.0)));
        assert_eq!(moved, Shape::rect(4.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn test_circle_transform_scales_radius() {
        let circle = Shape::circle(Vec2::new(1.0, 0.0), 2.0);
        let transform = Transform2D {
            position: Vec2::new(0.0, 10.0),
            rotation: 0.0,
            scale: 3.0,
        };
        match circle.transformed(&transform) {
            Shape::Circle(c) => {
                assert_relative_eq!(c.center, Vec2::new(3.0, 10.0));
                assert_relative_eq!(c.radius, 6.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_open_shapes_contain_nothing() {
        let polyline = Shape::Polyline(Polyline::new(vec![Vec2::zeros(), Vec2::new(1.0, 1.0)]));
        assert!(!polyline.contains_point(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn test_bounding_circle_contains_vertices() {
        let triangle = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(6.0, 0.0), Vec2::new(0.0, 6.0));
        let circle = Shape::Triangle(triangle).bounding_circle();
        for v in triangle.vertices() {
            assert!(circle.contains_point(v) || ((v - circle.center).norm() - circle.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_invalid_polygon() {
        assert!(!Shape::polygon(vec![Vec2::zeros()]).is_valid());
    }

    #[test]
    fn test_zero_area_rect_is_invalid() {
        assert!(Shape::rect(0.0, 0.0, 2.0, 1.0).is_valid());
        assert!(!Shape::rect(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Shape::Rect(Rect::default()).is_valid());
    }

    #[test]
    fn test_mirrored_ray_follows_its_points() {
        let mirror = Transform2D {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: -1.0,
        };
        let ray = Shape::Ray(Ray::new(Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0)));
        match ray.transformed(&mirror) {
            Shape::Ray(r) => {
                assert_relative_eq!(r.origin, Vec2::new(-1.0, 0.0));
                assert_relative_eq!(r.direction, Vec2::new(-1.0, 0.0));
            }
            other => panic!("expected ray, got {other:?}"),
        }
        let line = Shape::Line(Line::new(Vec2::zeros(), Vec2::new(0.0, 2.0)));
        match line.transformed(&mirror) {
            Shape::Line(l) => assert_relative_eq!(l.direction, Vec2::new(0.0, -1.0)),
            other => panic!("expected line, got {other:?}"),
        }
    }
}
