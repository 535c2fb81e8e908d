//! Query-side view of a [`Shape`]
//!
//! Every pairwise algorithm works on one of four operand classes, so the
//! ten shape variants collapse to ten class pairs instead of a hundred.

use crate::foundation::math::Vec2;
use crate::shapes::{Circle, Segment, Shape};

use super::linear::Linear;

pub(crate) enum Operand<'a> {
    Point(Vec2),
    Linear(Linear),
    Circle(&'a Circle),
    /// Triangle, Rect, Quad, Polygon and Polyline reduce to their edges
    Edges(Vec<Segment>),
}

impl<'a> Operand<'a> {
    /// `None` for invalid shapes, which never produce results
    pub fn from_shape(shape: &'a Shape) -> Option<Self> {
        if !shape.is_valid() {
            return None;
        }
        let operand = match shape {
            Shape::Point(p) => Operand::Point(*p),
            Shape::Segment(s) => Operand::Linear(Linear::from_segment(s)),
            Shape::Ray(r) => Operand::Linear(Linear::from_ray(r)),
            Shape::Line(l) => Operand::Linear(Linear::from_line(l)),
            Shape::Circle(c) => Operand::Circle(c),
            other => Operand::Edges(other.edges()),
        };
        Some(operand)
    }
}
