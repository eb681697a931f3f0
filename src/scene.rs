//! # Demo Scene
//!
//! The stock composition rendered by the `maskgen` binary: a 512 x 449 noisy
//! canvas with a rotated square and a rotated ellipse stamped onto it.
//!
//! | Mask | Chain |
//! |------|-------|
//! | square | `scale(25) rotate(π/16) translate(-65, 120)` |
//! | circle | `xscale(25) yscale(10) rotate(-π/6) translate(100, -60)` |

use std::f32::consts::PI;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::{Canvas, Centering, DEFAULT_NOISE_AMPLITUDE};
use crate::encode::Encoder;
use crate::error::Result;
use crate::mask::Mask;
use crate::shape::{Circle, Square};

/// Parameters the host application may set.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Output file. Default: masks.png
    pub output: PathBuf,
    /// Canvas rows. Default: 512
    pub rows: usize,
    /// Canvas columns. Default: 449
    pub columns: usize,
    /// Upper bound of the background noise. Default: 120
    pub noise_amplitude: u8,
    /// Fixed noise seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Pixel-to-world convention. Default: reference
    pub centering: Centering,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("masks.png"),
            rows: 512,
            columns: 449,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            seed: None,
            centering: Centering::Reference,
        }
    }
}

/// The two masks of the demo scene.
pub fn demo_masks() -> Result<Vec<Mask>> {
    Ok(vec![
        Mask::new(Square)
            .scale(25.0)?
            .rotate(PI / 16.0)?
            .translate(-65.0, 120.0)?,
        Mask::new(Circle)
            .xscale(25.0)?
            .yscale(10.0)?
            .rotate(-PI / 6.0)?
            .translate(100.0, -60.0)?,
    ])
}

/// Build the noisy canvas and stamp the demo masks onto it.
pub fn render(config: &SceneConfig) -> Result<Canvas> {
    let canvas = match config.seed {
        Some(seed) => Canvas::with_rng(
            config.rows,
            config.columns,
            config.noise_amplitude,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => Canvas::new(config.rows, config.columns, config.noise_amplitude)?,
    };
    let mut canvas = canvas.with_centering(config.centering);

    let masks = demo_masks()?;
    canvas.accumulate(&masks);
    Ok(canvas)
}

/// Render the scene and hand it to `encoder`.
pub fn run(config: &SceneConfig, encoder: &dyn Encoder) -> Result<Canvas> {
    let canvas = render(config)?;
    encoder.encode(&canvas, &config.output)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_demo_masks_centers() {
        let masks = demo_masks().unwrap();
        assert_eq!(masks.len(), 2);
        assert_eq!(masks[0].shape().name(), "square");
        assert_eq!(masks[1].shape().name(), "circle");
        assert!(masks[0].contains(Point::new(-65.0, 120.0)));
        assert!(masks[1].contains(Point::new(100.0, -60.0)));
        assert!(!masks[0].contains(Point::ORIGIN));
        assert!(!masks[1].contains(Point::ORIGIN));
    }

    #[test]
    fn test_square_extent() {
        let square = &demo_masks().unwrap()[0];
        // Half-width 25 in every direction before the diagonal
        assert!(square.contains(Point::new(-65.0 + 24.0, 120.0)));
        assert!(!square.contains(Point::new(-65.0 + 40.0, 120.0)));
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        let config = SceneConfig {
            rows: 64,
            columns: 48,
            seed: Some(11),
            ..Default::default()
        };
        let a = render(&config).unwrap();
        let b = render(&config).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_scene_fails_fast() {
        let config = SceneConfig {
            rows: u32::MAX as usize + 1,
            seed: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            render(&config),
            Err(crate::error::MaskgenError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!((config.rows, config.columns), (512, 449));
        assert_eq!(config.noise_amplitude, 120);
        assert_eq!(config.centering, Centering::Reference);
    }
}
