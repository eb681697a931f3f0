//! # Encoding
//!
//! Writes a finished [`Canvas`] to a single-channel 8-bit image file.
//!
//! The core only relies on the [`Encoder`] trait. [`ImageEncoder`] is the
//! stock implementation backed by the `image` crate; it picks the container
//! from the file extension (PNG is the reference choice, BMP and TIFF are
//! also enabled).

use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::canvas::Canvas;
use crate::error::{MaskgenError, Result};

/// Something that can persist a canvas.
pub trait Encoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<()>;
}

/// [`Encoder`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEncoder {
    format: Option<ImageFormat>,
}

impl ImageEncoder {
    /// Infer the format from the output path's extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always write `format`, whatever the extension says.
    pub fn with_format(format: ImageFormat) -> Self {
        Self {
            format: Some(format),
        }
    }
}

impl Encoder for ImageEncoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        let img = canvas.to_gray_image()?;

        let saved = match self.format {
            Some(format) => img.save_with_format(path, format),
            None => img.save(path),
        };
        saved.map_err(|e| {
            MaskgenError::Encoder(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "wrote image"
        );
        Ok(())
    }
}

impl Canvas {
    /// Copy the samples into an [`image::GrayImage`] (width = columns).
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        let width = u32::try_from(self.columns()).map_err(|_| {
            MaskgenError::InvalidDimensions(format!("{} columns exceed u32", self.columns()))
        })?;
        let height = u32::try_from(self.rows()).map_err(|_| {
            MaskgenError::InvalidDimensions(format!("{} rows exceed u32", self.rows()))
        })?;

        GrayImage::from_raw(width, height, self.samples().to_vec()).ok_or_else(|| {
            MaskgenError::InvalidDimensions(format!(
                "buffer does not match {}x{}",
                width, height
            ))
        })
    }
}
