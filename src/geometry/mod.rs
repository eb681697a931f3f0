//! # Geometry
//!
//! Homogeneous points and 3x3 affine transforms used to map world-space
//! pixels into a shape's normalized space.
//!
//! - [`point`]: [`Point`], a `(x, y, w)` triple
//! - [`transform`]: [`AffineTransform`] with a cached inverse, plus the raw
//!   matrix helpers it is built from
//!
//! ## Example
//!
//! ```rust
//! use maskgen::geometry::{AffineTransform, Point};
//!
//! let mut t = AffineTransform::identity();
//! t.scale(10.0)?;
//! t.translate(5.0, 5.0)?;
//!
//! let local = t.apply_inverse(Point::new(15.0, 5.0));
//! assert!((local.x - 1.0).abs() < 1e-6);
//! # Ok::<(), maskgen::MaskgenError>(())
//! ```

pub mod point;
pub mod transform;

pub use point::Point;
pub use transform::{AffineTransform, IDENTITY, Matrix3};
