//! # Affine Transforms
//!
//! 3x3 homogeneous transforms with a cached inverse.
//!
//! ## Composition Order
//!
//! Every chained operation pre-multiplies the accumulated forward matrix:
//!
//! ```text
//! forward = A_n * ... * A_2 * A_1
//! inverse = forward^-1 = A_1^-1 * A_2^-1 * ... * A_n^-1
//! ```
//!
//! so when a world-space point is mapped back into shape space, the inverse
//! of the newest operation is applied first.
//!
//! ## Rotation Convention
//!
//! ```text
//! |  cos θ   sin θ   0 |
//! | -sin θ   cos θ   0 |
//! |    0       0     1 |
//! ```
//!
//! With y increasing downward (screen space) a positive angle turns the shape
//! clockwise.

use super::Point;
use crate::error::{MaskgenError, Result};

/// Row-major 3x3 matrix.
pub type Matrix3 = [[f32; 3]; 3];

/// The 3x3 identity matrix.
pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Multiply two matrices (`a * b`).
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c];
        }
    }
    out
}

/// Determinant by cofactor expansion along the first row.
pub fn determinant(m: &Matrix3) -> f32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Exact inverse through the adjugate.
///
/// Each cofactor is divided by the determinant directly; scaling by a rounded
/// `1 / det` drifts by an ulp and can push `s * (1/s)` past 1 for some `s`.
///
/// Returns `None` when the matrix is singular or the result is not finite.
pub fn invert(m: &Matrix3) -> Option<Matrix3> {
    let det = determinant(m);
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let adj = [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ];

    let mut out = [[0.0; 3]; 3];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = adj[r][c] / det;
        }
    }

    out.iter().flatten().all(|v| v.is_finite()).then_some(out)
}

/// Apply a matrix to a homogeneous point (`m * p`).
#[inline]
pub fn transform_point(m: &Matrix3, p: Point) -> Point {
    let v = p.to_array();
    Point::homogeneous(
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    )
}

/// Non-uniform scale matrix.
#[inline]
pub fn scale_matrix(sx: f32, sy: f32) -> Matrix3 {
    [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]]
}

/// Rotation matrix (clockwise on a y-down screen).
#[inline]
pub fn rotation_matrix(radians: f32) -> Matrix3 {
    let (sin, cos) = radians.sin_cos();
    [[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

/// Translation matrix.
#[inline]
pub fn translation_matrix(x: f32, y: f32) -> Matrix3 {
    [[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]]
}

/// Forward transform with its cached inverse.
///
/// The pair is only ever modified through [`AffineTransform::chain`], which
/// recomputes the inverse before returning, so `forward * inverse = I` holds
/// whenever the transform is observable.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    forward: Matrix3,
    inverse: Matrix3,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Identity transform: forward = inverse = I.
    pub fn identity() -> Self {
        Self {
            forward: IDENTITY,
            inverse: IDENTITY,
        }
    }

    /// Pre-multiply `a` onto the forward matrix and recompute the inverse.
    ///
    /// On `SingularTransform` the transform is left unchanged.
    pub fn chain(&mut self, a: &Matrix3) -> Result<()> {
        let forward = multiply(a, &self.forward);
        let inverse = invert(&forward).ok_or_else(|| {
            MaskgenError::SingularTransform(format!(
                "matrix {:?} has no inverse (determinant {})",
                forward,
                determinant(&forward)
            ))
        })?;

        tracing::trace!(?forward, "chained transform");
        self.forward = forward;
        self.inverse = inverse;
        Ok(())
    }

    /// Uniform scale.
    pub fn scale(&mut self, s: f32) -> Result<()> {
        self.chain(&scale_matrix(s, s))
    }

    /// Horizontal scale.
    pub fn xscale(&mut self, s: f32) -> Result<()> {
        self.chain(&scale_matrix(s, 1.0))
    }

    /// Vertical scale.
    pub fn yscale(&mut self, s: f32) -> Result<()> {
        self.chain(&scale_matrix(1.0, s))
    }

    /// Rotation in radians, see the module docs for the sign convention.
    pub fn rotate(&mut self, radians: f32) -> Result<()> {
        self.chain(&rotation_matrix(radians))
    }

    /// Translation by `(x, y)`.
    pub fn translate(&mut self, x: f32, y: f32) -> Result<()> {
        self.chain(&translation_matrix(x, y))
    }

    /// Map a shape-space point into world space.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        transform_point(&self.forward, p)
    }

    /// Map a world-space point into the shape's normalized space.
    #[inline]
    pub fn apply_inverse(&self, p: Point) -> Point {
        transform_point(&self.inverse, p)
    }

    pub fn forward(&self) -> &Matrix3 {
        &self.forward
    }

    pub fn inverse(&self) -> &Matrix3 {
        &self.inverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn assert_matrix_near(a: &Matrix3, b: &Matrix3) {
        for r in 0..3 {
            for c in 0..3 {
                assert!(
                    (a[r][c] - b[r][c]).abs() < 1e-5,
                    "mismatch at ({},{}): {} vs {}",
                    r,
                    c,
                    a[r][c],
                    b[r][c]
                );
            }
        }
    }

    #[test]
    fn test_identity() {
        let t = AffineTransform::identity();
        assert_eq!(t.forward(), &IDENTITY);
        assert_eq!(t.inverse(), &IDENTITY);
        assert_eq!(t.apply_inverse(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_inverse_consistent_after_chain() {
        let mut t = AffineTransform::identity();
        t.scale(25.0).unwrap();
        t.rotate(PI / 16.0).unwrap();
        t.translate(-65.0, 120.0).unwrap();
        assert_matrix_near(&multiply(t.forward(), t.inverse()), &IDENTITY);
    }

    #[test]
    fn test_chain_premultiplies() {
        // scale then translate: forward = T * S
        let mut t = AffineTransform::identity();
        t.scale(2.0).unwrap();
        t.translate(10.0, 0.0).unwrap();
        let p = t.apply(Point::new(1.0, 0.0));
        assert!((p.x - 12.0).abs() < 1e-6);

        // newest inverse first: undo the translation, then the scale
        let q = t.apply_inverse(Point::new(12.0, 0.0));
        assert!((q.x - 1.0).abs() < 1e-6);
        assert!(q.y.abs() < 1e-6);
    }

    #[test]
    fn test_rotation_sign_convention() {
        let m = rotation_matrix(PI / 2.0);
        let p = transform_point(&m, Point::new(1.0, 0.0));
        // (1, 0) maps to (cos, -sin) = (0, -1)
        assert!(p.x.abs() < 1e-6);
        assert!((p.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_xscale_yscale_independent() {
        let mut t = AffineTransform::identity();
        t.xscale(4.0).unwrap();
        t.yscale(2.0).unwrap();
        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(4.0, 2.0));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let mut t = AffineTransform::identity();
        t.scale(3.0).unwrap();
        let before = t.clone();
        let err = t.scale(0.0).unwrap_err();
        assert!(matches!(err, MaskgenError::SingularTransform(_)));
        assert_eq!(t, before);
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut t = AffineTransform::identity();
        assert!(t.translate(f32::NAN, 0.0).is_err());
        assert_eq!(t, AffineTransform::identity());
    }

    #[test]
    fn test_invert_singular() {
        let m = [[1.0, 2.0, 0.0], [2.0, 4.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(invert(&m).is_none());
    }
}
