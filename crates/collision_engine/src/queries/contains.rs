//! Reference-point containment between two shapes

use crate::foundation::math::Vec2;
use crate::shapes::Shape;

/// The reference point of one shape that lies inside the other, if any
///
/// Checks whether closed `a` holds `b`'s reference point first, then the
/// reverse. Open shapes never contain anything.
pub(crate) fn contained_reference(a: &Shape, b: &Shape) -> Option<Vec2> {
    if !a.is_valid() || !b.is_valid() {
        return None;
    }
    let b_reference = b.reference_point();
    if a.is_closed() && a.contains_point(b_reference) {
        return Some(b_reference);
    }
    let a_reference = a.reference_point();
    if b.is_closed() && b.contains_point(a_reference) {
        return Some(a_reference);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_direction() {
        let big = Shape::rect(0.0, 0.0, 100.0, 100.0);
        let small = Shape::circle(Vec2::new(50.0, 50.0), 5.0);
        assert_eq!(contained_reference(&big, &small), Some(Vec2::new(50.0, 50.0)));
        assert_eq!(contained_reference(&small, &big), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_open_shapes_contain_nothing() {
        let segment = Shape::segment(Vec2::zeros(), Vec2::new(10.0, 0.0));
        let point = Shape::Point(Vec2::new(5.0, 0.0));
        assert_eq!(contained_reference(&segment, &point), None);
    }

    #[test]
    fn test_invalid_shape_contains_nothing() {
        let degenerate = Shape::polygon(vec![Vec2::zeros(), Vec2::new(10.0, 0.0)]);
        assert_eq!(contained_reference(&degenerate, &Shape::Point(Vec2::new(1.0, 0.0))), None);
    }
}
