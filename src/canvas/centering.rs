//! Pixel-to-world centering conventions.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Point;

/// How a pixel index is turned into a world-space coordinate.
///
/// ```text
/// Reference:   (x - rows/2,    y - columns/2)
/// Dimensional: (x - columns/2, y - rows/2)
/// ```
///
/// `Reference` offsets the horizontal axis by half the row count and the
/// vertical axis by half the column count. Output images are compared against
/// that convention, so it stays the default. On square canvases both agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    #[default]
    Reference,
    Dimensional,
}

impl Centering {
    /// All conventions, in display order.
    pub const ALL: &'static [Centering] = &[Centering::Reference, Centering::Dimensional];

    /// World coordinate of the pixel at column `x`, row `y`.
    #[inline]
    pub fn world_point(self, x: usize, y: usize, rows: usize, columns: usize) -> Point {
        let (half_x, half_y) = match self {
            Centering::Reference => (rows as f32 / 2.0, columns as f32 / 2.0),
            Centering::Dimensional => (columns as f32 / 2.0, rows as f32 / 2.0),
        };
        Point::new(x as f32 - half_x, y as f32 - half_y)
    }

    pub fn name(self) -> &'static str {
        match self {
            Centering::Reference => "reference",
            Centering::Dimensional => "dimensional",
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Centering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(Centering::Reference),
            "dimensional" => Ok(Centering::Dimensional),
            other => Err(format!(
                "unknown centering '{}' (expected 'reference' or 'dimensional')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_swaps_axes() {
        // 4 rows, 8 columns
        let p = Centering::Reference.world_point(0, 0, 4, 8);
        assert_eq!(p, Point::new(-2.0, -4.0));
    }

    #[test]
    fn test_dimensional() {
        let p = Centering::Dimensional.world_point(0, 0, 4, 8);
        assert_eq!(p, Point::new(-4.0, -2.0));
    }

    #[test]
    fn test_square_canvas_agrees() {
        for (x, y) in [(0, 0), (3, 7), (9, 9)] {
            assert_eq!(
                Centering::Reference.world_point(x, y, 10, 10),
                Centering::Dimensional.world_point(x, y, 10, 10)
            );
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("reference".parse::<Centering>(), Ok(Centering::Reference));
        assert_eq!("Dimensional".parse::<Centering>(), Ok(Centering::Dimensional));
        assert!("centered".parse::<Centering>().is_err());
        for c in Centering::ALL {
            assert_eq!(c.to_string().parse::<Centering>(), Ok(*c));
        }
    }
}
