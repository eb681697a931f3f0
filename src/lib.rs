//! # maskgen - Noisy Rasters with Affine Shape Masks
//!
//! maskgen synthesizes a grayscale image made of uniform noise with
//! geometric shapes stamped onto it. It provides:
//!
//! - **Affine transforms**: 3x3 homogeneous matrices with a cached inverse
//! - **Shapes**: unit circle and unit square containment tests
//! - **Masks**: a shape placed in the world through a chained transform
//! - **Canvas**: noise generation and mask accumulation
//! - **Encoding**: single-channel 8-bit image output through `image`
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use maskgen::{
//!     canvas::Canvas,
//!     encode::{Encoder, ImageEncoder},
//!     mask::Mask,
//!     shape::{Circle, Square},
//! };
//!
//! // Place the shapes
//! let masks = vec![
//!     Mask::new(Square).scale(25.0)?.rotate(0.2)?.translate(-65.0, 120.0)?,
//!     Mask::new(Circle).xscale(25.0)?.yscale(10.0)?.translate(100.0, -60.0)?,
//! ];
//!
//! // Noise, then masks
//! let mut canvas = Canvas::new(512, 449, 120)?;
//! canvas.accumulate(&masks);
//!
//! // Write the result
//! ImageEncoder::new().encode(&canvas, Path::new("masks.png"))?;
//!
//! # Ok::<(), maskgen::MaskgenError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | Homogeneous points and affine transforms |
//! | [`shape`] | Normalized containment tests |
//! | [`mask`] | Transformed shapes |
//! | [`canvas`] | Noise buffer and accumulation |
//! | [`encode`] | Image file output |
//! | [`scene`] | The demo composition used by the CLI |
//! | [`error`] | Error types |

pub mod canvas;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod scene;
pub mod shape;

// Re-exports for convenience
pub use canvas::Canvas;
pub use error::MaskgenError;
pub use mask::Mask;
