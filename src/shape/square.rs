//! # Unit Square
//!
//! ```text
//! inside = |x| <= 1 and |y| <= 1
//! ```
//!
//! The boundary is inclusive, so the prototype spans `[-1, 1] x [-1, 1]`.

use super::Shape;
use crate::geometry::Point;

/// The closed square `[-1, 1] x [-1, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    #[inline]
    fn contains_local(&self, p: Point) -> bool {
        p.x.abs() <= 1.0 && p.y.abs() <= 1.0
    }
}
