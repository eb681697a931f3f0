//! # maskgen CLI
//!
//! Renders the demo scene to an image file.
//!
//! ## Usage
//!
//! ```bash
//! # Default 512x449 scene written to masks.png
//! maskgen
//!
//! # Custom size, deterministic noise
//! maskgen --rows 256 --columns 256 --seed 7 --output out.png
//!
//! # Show the masks without rendering
//! maskgen --list
//! ```

use clap::Parser;
use std::path::PathBuf;

use maskgen::{
    MaskgenError,
    canvas::{Centering, DEFAULT_NOISE_AMPLITUDE},
    encode::ImageEncoder,
    scene::{self, SceneConfig},
};

/// maskgen - noisy grayscale image with affine shape masks
#[derive(Parser, Debug)]
#[command(name = "maskgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output image file (format from extension)
    #[arg(long, short, value_name = "FILE", default_value = "masks.png")]
    output: PathBuf,

    /// Canvas height in rows
    #[arg(long, default_value = "512")]
    rows: usize,

    /// Canvas width in columns
    #[arg(long, default_value = "449")]
    columns: usize,

    /// Maximum background noise level (0-255)
    #[arg(long, default_value_t = DEFAULT_NOISE_AMPLITUDE)]
    noise: u8,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Pixel centering convention (reference or dimensional)
    #[arg(long, default_value = "reference")]
    centering: Centering,

    /// List the scene's masks and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MaskgenError> {
    let cli = Cli::parse();

    if cli.list {
        println!("Scene masks:");
        for mask in scene::demo_masks()? {
            println!("  {}", mask);
        }
        return Ok(());
    }

    let config = SceneConfig {
        output: cli.output,
        rows: cli.rows,
        columns: cli.columns,
        noise_amplitude: cli.noise,
        seed: cli.seed,
        centering: cli.centering,
    };

    println!(
        "Generating {}x{} image (noise {}, {} centering)...",
        config.rows, config.columns, config.noise_amplitude, config.centering
    );

    scene::run(&config, &ImageEncoder::new())?;
    println!("Saved to {}", config.output.display());

    Ok(())
}
