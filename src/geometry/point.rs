//! Homogeneous 2D points.

/// A 2D point in homogeneous coordinates.
///
/// Pixel-space and shape-space points always carry `w = 1`, which lets a
/// translation be expressed as a 3x3 matrix product alongside scale and
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub w: f32,
}

impl Point {
    /// The origin `(0, 0, 1)`.
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        w: 1.0,
    };

    /// Create a point with `w = 1`.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, w: 1.0 }
    }

    /// Create a point with an explicit homogeneous component.
    #[inline]
    pub const fn homogeneous(x: f32, y: f32, w: f32) -> Self {
        Self { x, y, w }
    }

    /// Components as an `[x, y, w]` column.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.w]
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, w]: [f32; 3]) -> Self {
        Self { x, y, w }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_unit_w() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(p.w, 1.0);
        assert_eq!(p.to_array(), [3.0, -4.0, 1.0]);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Point::from((0.0, 0.0)), Point::ORIGIN);
    }
}
