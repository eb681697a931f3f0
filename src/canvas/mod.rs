//! # Canvas
//!
//! A rows x columns grid of 8-bit grayscale samples, seeded with uniform
//! noise and then brightened wherever at least one [`Mask`] covers a pixel.
//!
//! ## Lifecycle
//!
//! ```text
//! with_rng / new         accumulate(masks)
//!   ──────────▶ Noisy ─────────────────────▶ Composited
//! ```
//!
//! ## Accumulation
//!
//! For the pixel at row `y`, column `x`:
//!
//! ```text
//! pixel = centering.world_point(x, y, rows, columns)
//! if any(mask.contains(pixel)):
//!     sample = min(sample + (255 - noise_amplitude), 255)
//! ```
//!
//! A pixel covered by several masks is boosted once. Calling `accumulate`
//! again boosts again, so a second pass is only a no-op once the covered
//! samples have already saturated at 255.
//!
//! Rows are processed in parallel with rayon. Masks are only read during the
//! pass and every worker owns a disjoint row slice.
//!
//! ## Example
//!
//! ```rust
//! use maskgen::{canvas::Canvas, mask::Mask, shape::Circle};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut canvas = Canvas::with_rng(64, 64, 120, &mut rng)?;
//! let masks = vec![Mask::new(Circle).scale(16.0)?];
//!
//! let boosted = canvas.accumulate(&masks);
//! assert!(boosted > 0);
//! assert!(canvas.get(32, 32).is_some_and(|v| v >= 135));
//! # Ok::<(), maskgen::MaskgenError>(())
//! ```

pub mod centering;

pub use centering::Centering;

use rand::Rng;
use rayon::prelude::*;

use crate::error::{MaskgenError, Result};
use crate::geometry::Point;
use crate::mask::Mask;

/// Noise amplitude used when the caller does not pick one.
pub const DEFAULT_NOISE_AMPLITUDE: u8 = 120;

/// Composition state of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    /// Pure noise, no masks applied yet.
    Noisy,
    /// At least one accumulation pass has run.
    Composited,
}

/// Row-major 8-bit grayscale buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    columns: usize,
    noise_amplitude: u8,
    centering: Centering,
    state: CanvasState,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a noisy canvas using the thread-local, OS-seeded generator.
    pub fn new(rows: usize, columns: usize, noise_amplitude: u8) -> Result<Self> {
        Self::with_rng(rows, columns, noise_amplitude, &mut rand::rng())
    }

    /// Create a noisy canvas drawing every sample uniformly from
    /// `[0, noise_amplitude]` with the supplied generator.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        noise_amplitude: u8,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MaskgenError::InvalidDimensions(format!(
                "canvas must be non-empty, got {}x{}",
                rows, columns
            )));
        }
        if u32::try_from(rows).is_err() || u32::try_from(columns).is_err() {
            return Err(MaskgenError::InvalidDimensions(format!(
                "{}x{} exceeds the encodable {} pixels per side",
                rows,
                columns,
                u32::MAX
            )));
        }
        let len = rows.checked_mul(columns).ok_or_else(|| {
            MaskgenError::InvalidDimensions(format!("{}x{} samples overflow", rows, columns))
        })?;

        let data = (0..len)
            .map(|_| rng.random_range(0..=noise_amplitude))
            .collect();

        tracing::debug!(rows, columns, noise_amplitude, "created noisy canvas");

        Ok(Self {
            rows,
            columns,
            noise_amplitude,
            centering: Centering::default(),
            state: CanvasState::Noisy,
            data,
        })
    }

    /// Use a different pixel-to-world convention for later passes.
    pub fn with_centering(mut self, centering: Centering) -> Self {
        self.centering = centering;
        self
    }

    /// Brighten every pixel covered by at least one mask.
    ///
    /// Returns the number of boosted pixels.
    #[tracing::instrument(skip_all, fields(masks = masks.len()))]
    pub fn accumulate(&mut self, masks: &[Mask]) -> usize {
        let boost = u8::MAX - self.noise_amplitude;
        let (rows, columns, centering) = (self.rows, self.columns, self.centering);

        let boosted: usize = self
            .data
            .par_chunks_mut(columns)
            .enumerate()
            .map(|(y, row)| {
                let mut count = 0;
                for (x, sample) in row.iter_mut().enumerate() {
                    let pixel = centering.world_point(x, y, rows, columns);
                    if masks.iter().any(|mask| mask.contains(pixel)) {
                        *sample = sample.saturating_add(boost);
                        count += 1;
                    }
                }
                count
            })
            .sum();

        self.state = CanvasState::Composited;
        tracing::debug!(boosted, "accumulated masks");
        boosted
    }

    /// The world coordinate `accumulate` tests for a pixel.
    pub fn world_point(&self, row: usize, column: usize) -> Point {
        self.centering.world_point(column, row, self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn noise_amplitude(&self) -> u8 {
        self.noise_amplitude
    }

    pub fn centering(&self) -> Centering {
        self.centering
    }

    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Sample at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.data.get(row * self.columns + column).copied()
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.data
    }
}
