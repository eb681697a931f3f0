//! # Masks
//!
//! A mask binds a [`Shape`] to an [`AffineTransform`] and answers whether a
//! world-space pixel falls inside the transformed shape.
//!
//! ## Containment
//!
//! ```text
//! local    = inverse * pixel
//! contains = shape.contains_local(local)
//! ```
//!
//! ## Chaining
//!
//! Transform operations consume the mask and hand it back, so a placement
//! reads in construction order:
//!
//! ```rust
//! use std::f32::consts::PI;
//! use maskgen::{geometry::Point, mask::Mask, shape::Square};
//!
//! let mask = Mask::new(Square)
//!     .scale(25.0)?
//!     .rotate(PI / 16.0)?
//!     .translate(-65.0, 120.0)?;
//!
//! assert!(mask.contains(Point::new(-65.0, 120.0)));
//! assert!(!mask.contains(Point::ORIGIN));
//! # Ok::<(), maskgen::MaskgenError>(())
//! ```
//!
//! Each operation pre-multiplies the forward matrix, so the transform chained
//! last is the first one undone when a pixel is tested.

use std::fmt;

use crate::error::Result;
use crate::geometry::{AffineTransform, Point};
use crate::shape::Shape;

/// A transformed shape used as a containment test.
pub struct Mask {
    shape: Box<dyn Shape>,
    transform: AffineTransform,
}

impl Mask {
    /// Create a mask with an identity transform.
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self::from_boxed(Box::new(shape))
    }

    /// Create a mask from an already boxed shape (see [`crate::shape::by_name`]).
    pub fn from_boxed(shape: Box<dyn Shape>) -> Self {
        Self {
            shape,
            transform: AffineTransform::identity(),
        }
    }

    /// Uniform scale.
    pub fn scale(mut self, s: f32) -> Result<Self> {
        self.transform.scale(s)?;
        Ok(self)
    }

    /// Horizontal scale.
    pub fn xscale(mut self, s: f32) -> Result<Self> {
        self.transform.xscale(s)?;
        Ok(self)
    }

    /// Vertical scale.
    pub fn yscale(mut self, s: f32) -> Result<Self> {
        self.transform.yscale(s)?;
        Ok(self)
    }

    /// Rotation in radians (clockwise on a y-down screen).
    pub fn rotate(mut self, radians: f32) -> Result<Self> {
        self.transform.rotate(radians)?;
        Ok(self)
    }

    /// Translation by `(x, y)`.
    pub fn translate(mut self, x: f32, y: f32) -> Result<Self> {
        self.transform.translate(x, y)?;
        Ok(self)
    }

    /// Whether the world-space `pixel` lies inside the transformed shape.
    #[inline]
    pub fn contains(&self, pixel: Point) -> bool {
        self.shape.contains_local(self.transform.apply_inverse(pixel))
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask")
            .field("shape", &self.shape.name())
            .field("transform", &self.transform)
            .finish()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.transform.apply(Point::ORIGIN);
        write!(
            f,
            "{} centered at ({:.1}, {:.1})",
            self.shape.name(),
            center.x,
            center.y
        )
    }
}
