//! # Unit Circle
//!
//! ```text
//! inside = x² + y² < 1
//! ```
//!
//! Strict inequality: points on the unit boundary are outside.

use super::Shape;
use crate::geometry::Point;

/// The open unit disc centered on the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    #[inline]
    fn contains_local(&self, p: Point) -> bool {
        p.x * p.x + p.y * p.y < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_inside() {
        assert!(Circle.contains_local(Point::ORIGIN));
        assert!(Circle.contains_local(Point::new(0.5, -0.5)));
    }

    #[test]
    fn test_boundary_excluded() {
        assert!(!Circle.contains_local(Point::new(1.0, 0.0)));
        assert!(!Circle.contains_local(Point::new(0.0, -1.0)));
    }

    #[test]
    fn test_square_corner_outside() {
        assert!(!Circle.contains_local(Point::new(0.8, 0.8)));
    }
}
