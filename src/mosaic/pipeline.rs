//! End-to-end mosaic generation
//!
//! Stages run strictly in order: source validation, palette reconciliation,
//! matching, selective tile loading and assembly. Any fatal error aborts the
//! run before an output image exists.

use crate::io::configuration::MosaicConfig;
use crate::io::error::{MosaicError, Result};
use crate::io::image::load_source;
use crate::io::progress::ProgressManager;
use crate::mosaic::assembler::assemble;
use crate::mosaic::loader::{LoadedTileSet, load_used_tiles};
use crate::mosaic::matcher::{Mask, match_palette_with_progress, pixel_grid};
use crate::palette::cache::{PaletteCache, ReconcileStats};
use crate::palette::directory::TileDirectory;
use image::RgbImage;
use std::path::Path;
use tracing::info;

/// Result of a successful run
#[derive(Debug)]
pub struct MosaicOutcome {
    /// Tile assignment per source pixel
    pub mask: Mask,
    /// Number of distinct tiles loaded
    pub tiles_loaded: usize,
    /// Palette reconciliation counters
    pub reconcile_stats: ReconcileStats,
    /// Assembled mosaic
    pub image: RgbImage,
}

/// Drives the palette cache, matcher, loader and assembler
pub struct MosaicPipeline {
    config: MosaicConfig,
    progress: ProgressManager,
}

impl MosaicPipeline {
    /// Create a pipeline, showing progress bars if the config asks for them
    pub fn new(config: MosaicConfig) -> Self {
        let progress = ProgressManager::new(config.show_progress);
        Self { config, progress }
    }

    /// Active configuration
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Generate a mosaic for the image at `source_path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be decoded, is not RGB, or is empty
    /// - The tile directory yields no usable tile
    /// - A tile referenced by the mask can no longer be loaded
    /// - The tile directory or cache file cannot be accessed
    pub fn run(&self, source_path: &Path, resize: Option<(u32, u32)>) -> Result<MosaicOutcome> {
        let source = load_source(source_path, resize)?;
        info!(
            width = source.width(),
            height = source.height(),
            "source image loaded"
        );

        let mut cache = PaletteCache::new(&self.config);
        let palette = cache.reconcile_with_progress(&self.progress.stage("palette", 0))?;

        info!("retrieving image mask");
        let grid = pixel_grid(&source);
        let matching = self.progress.stage("matching", 0);
        let mask = match_palette_with_progress(&grid, &palette, &matching).ok_or_else(|| {
            MosaicError::EmptyPalette {
                directory: self.config.tile_directory.clone(),
            }
        })?;
        info!("finished retrieving image mask");

        let directory = TileDirectory::from_config(&self.config);
        let tiles = load_used_tiles(
            &directory,
            &mask,
            self.config.tile_size,
            &self.progress.stage("loading", 0),
        )?;

        let image = self.compose(&mask, &tiles);
        self.progress.finish();

        Ok(MosaicOutcome {
            tiles_loaded: tiles.len(),
            reconcile_stats: cache.stats,
            mask,
            image,
        })
    }

    fn compose(&self, mask: &Mask, tiles: &LoadedTileSet) -> RgbImage {
        info!("generating final image");
        let image = assemble(
            mask,
            tiles,
            self.config.tile_size,
            self.config.background,
            &self.progress.stage("assembling", 0),
        );
        info!(
            width = image.width(),
            height = image.height(),
            "finished generating final image"
        );
        image
    }
}
