//! Command-line interface for turning one image into a photomosaic

use crate::io::configuration::{
    DEFAULT_CACHE_PATH, DEFAULT_TILE_DIRECTORY, MosaicConfig, PREVIEW_FILENAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::save_rgb;
use crate::mosaic::pipeline::{MosaicOutcome, MosaicPipeline};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Transform images into mosaics of tile images"
)]
/// Command-line arguments for mosaic generation
pub struct Cli {
    /// Image to transform
    #[arg(value_name = "IMAGE")]
    pub image_path: PathBuf,

    /// Where to save the result (default: write a preview to the temp directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Resize the source image to WIDTH,HEIGHT before matching
    #[arg(short, long, value_name = "WIDTH,HEIGHT", value_parser = parse_resize)]
    pub resize: Option<(u32, u32)>,

    /// Delete invalid images from the tile directory
    #[arg(short, long)]
    pub delete: bool,

    /// Directory containing the tile images
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// Palette cache file
    #[arg(short, long, default_value = DEFAULT_CACHE_PATH)]
    pub cache: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-tile decisions
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the runtime configuration from the parsed flags
    pub fn config(&self) -> MosaicConfig {
        MosaicConfig {
            delete_invalid: self.delete,
            show_progress: self.should_show_progress(),
            ..MosaicConfig::with_paths(&self.tiles, &self.cache)
        }
    }

    /// Destination of the generated image
    pub fn destination(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(PREVIEW_FILENAME))
    }
}

/// Parse a `WIDTH,HEIGHT` pair; extra components are ignored
///
/// # Errors
///
/// Returns a message if either dimension is missing, not a number, or zero
pub fn parse_resize(value: &str) -> std::result::Result<(u32, u32), String> {
    let mut parts = value.split(',').map(str::trim);
    let mut dimension = |name: &'static str| -> Result<u32> {
        let part = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| invalid_parameter("resize", &value, &format!("missing {name}")))?;
        let parsed: u32 = part
            .parse()
            .map_err(|e| invalid_parameter("resize", &value, &format!("{name}: {e}")))?;
        if parsed == 0 {
            return Err(invalid_parameter(
                "resize",
                &value,
                &format!("{name} must be positive"),
            ));
        }
        Ok(parsed)
    };

    let width = dimension("width").map_err(|e| e.to_string())?;
    let height = dimension("height").map_err(|e| e.to_string())?;
    Ok((width, height))
}

/// Runs the pipeline for the parsed arguments and writes the result
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the mosaic and save it or write the preview
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the image cannot be written
    pub fn run(&self) -> Result<MosaicOutcome> {
        let pipeline = MosaicPipeline::new(self.cli.config());
        let outcome = pipeline.run(&self.cli.image_path, self.cli.resize)?;

        let destination = self.cli.destination();
        save_rgb(&outcome.image, &destination)?;
        if self.cli.output.is_some() {
            info!(path = %destination.display(), "mosaic saved");
        } else {
            info!(path = %destination.display(), "preview written");
        }

        Ok(outcome)
    }
}
