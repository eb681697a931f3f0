//! # Shapes
//!
//! Normalized shape prototypes. Each shape is self-contained in its own module
//! with a struct implementing the [`Shape`] trait.
//!
//! A shape answers a single question: is a point, already mapped into the
//! shape's local space, inside the unit prototype? Placement, size and
//! orientation are the job of the [`Mask`](crate::mask::Mask) that owns it.
//!
//! ## Adding a New Shape
//!
//! 1. Create `src/shape/myshape.rs` with a struct implementing [`Shape`]
//! 2. Add `pub mod myshape;` below
//! 3. Add to [`SHAPES`] and [`by_name`]

pub mod circle;
pub mod square;

pub use circle::Circle;
pub use square::Square;

use crate::geometry::Point;

/// All built-in shapes, in display order.
pub const SHAPES: &[&str] = &["circle", "square"];

/// Trait for normalized containment tests.
pub trait Shape: Send + Sync {
    /// Shape name (lowercase, e.g., "circle").
    fn name(&self) -> &'static str;

    /// Whether a point in the shape's local space lies inside the prototype.
    fn contains_local(&self, p: Point) -> bool;
}

/// Get a built-in shape by name.
pub fn by_name(name: &str) -> Option<Box<dyn Shape>> {
    match name.to_lowercase().as_str() {
        "circle" => Some(Box::new(Circle)),
        "square" => Some(Box::new(Square)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert!(by_name("circle").is_some());
        assert!(by_name("SQUARE").is_some()); // Case insensitive
        assert!(by_name("triangle").is_none());
    }

    #[test]
    fn test_names_match_registry() {
        for name in SHAPES {
            assert_eq!(by_name(name).map(|s| s.name()), Some(*name));
        }
    }
}
