//! Palette reconciliation against the persisted cache
//!
//! A warm run only hashes tile files: colors of fingerprints already present
//! in the cache are reused, and only new or modified tiles are decoded. The
//! cache file is rewritten at most once, and only when its content changes.

use crate::io::configuration::MosaicConfig;
use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_tile;
use crate::palette::color::AverageColor;
use crate::palette::directory::TileDirectory;
use crate::palette::fingerprint::fingerprint_file;
use crate::palette::record::{Palette, read_record, write_record};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters describing one reconciliation
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Tile files hashed
    pub hashed: usize,
    /// Colors taken from the cache without decoding (cache hits)
    pub reused: usize,
    /// Tiles decoded and averaged (cache misses)
    pub decoded: usize,
    /// Files with the same content as an earlier file
    pub duplicates: usize,
    /// Files skipped because they could not be read or validated
    pub skipped: usize,
    /// Invalid files removed from the tile directory
    pub deleted: usize,
    /// Whether the cache file was written
    pub cache_written: bool,
}

/// Owns the persisted cache file and the tile directory it describes
pub struct PaletteCache {
    directory: TileDirectory,
    cache_path: PathBuf,
    tile_size: u32,
    delete_invalid: bool,

    /// Statistics of the last reconciliation
    pub stats: ReconcileStats,
}

impl PaletteCache {
    /// Create a cache for the configured tile directory and cache file
    pub fn new(config: &MosaicConfig) -> Self {
        Self {
            directory: TileDirectory::from_config(config),
            cache_path: config.cache_path.clone(),
            tile_size: config.tile_size,
            delete_invalid: config.delete_invalid,
            stats: ReconcileStats::default(),
        }
    }

    /// Cache file location
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Load the persisted palette, empty when absent or malformed
    ///
    /// Returns the palette along with the raw text it was parsed from.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file exists but cannot be read
    pub fn load(&self) -> Result<(Palette, Option<String>)> {
        let Some(bytes) = read_record(&self.cache_path)? else {
            debug!(path = %self.cache_path.display(), "no palette cache found");
            return Ok((Palette::new(), None));
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    path = %self.cache_path.display(),
                    "palette cache is not valid UTF-8 ({e}); rebuilding palette cache"
                );
                // Lossy text never equals a serialized palette, forcing a rewrite
                let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
                return Ok((Palette::new(), Some(lossy)));
            }
        };

        match Palette::parse(&text, &self.cache_path) {
            Ok(palette) => Ok((palette, Some(text))),
            Err(e) => {
                warn!("{e}; rebuilding palette cache");
                Ok((Palette::new(), Some(text)))
            }
        }
    }

    /// Reconcile with a hidden progress bar
    ///
    /// # Errors
    ///
    /// See [`PaletteCache::reconcile_with_progress`]
    pub fn reconcile(&mut self) -> Result<Palette> {
        self.reconcile_with_progress(&ProgressBar::hidden())
    }

    /// Build the palette for the current tile directory contents
    ///
    /// Tiles that fail hashing, decoding or size validation are skipped,
    /// and deleted when configured to. The cache file is rewritten only if
    /// the serialized palette differs from what was loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile directory or the existing cache file cannot be read
    /// - The cache file cannot be written
    /// - No usable tile remains ([`MosaicError::EmptyPalette`])
    pub fn reconcile_with_progress(&mut self, progress: &ProgressBar) -> Result<Palette> {
        info!(directory = %self.directory.root().display(), "retrieving mosaic palette");
        self.stats = ReconcileStats::default();

        let (known, loaded_text) = self.load()?;
        let paths = self.directory.tile_paths()?;
        progress.set_length(paths.len() as u64);

        let mut palette = Palette::new();
        for path in &paths {
            self.reconcile_tile(path, &known, &mut palette)?;
            progress.inc(1);
        }
        progress.finish_and_clear();

        let serialized = palette.serialize();
        let unchanged = match &loaded_text {
            Some(text) => *text == serialized,
            None => palette.is_empty(),
        };
        if !unchanged {
            write_record(&self.cache_path, &serialized)?;
            self.stats.cache_written = true;
            debug!(
                path = %self.cache_path.display(),
                entries = palette.len(),
                "palette cache written"
            );
        }

        info!(
            entries = palette.len(),
            reused = self.stats.reused,
            decoded = self.stats.decoded,
            skipped = self.stats.skipped,
            "finished retrieving mosaic palette"
        );

        if palette.is_empty() {
            return Err(MosaicError::EmptyPalette {
                directory: self.directory.root().to_path_buf(),
            });
        }
        Ok(palette)
    }

    // Per-tile failures are recovered here; anything else aborts the run
    fn reconcile_tile(
        &mut self,
        path: &Path,
        known: &Palette,
        palette: &mut Palette,
    ) -> Result<()> {
        let fingerprint = match fingerprint_file(path) {
            Ok(fingerprint) => fingerprint,
            Err(e) if e.is_tile_recoverable() => {
                warn!("{e}; skipping tile");
                self.stats.skipped += 1;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.stats.hashed += 1;

        if palette.contains(&fingerprint) {
            debug!(path = %path.display(), %fingerprint, "duplicate tile content");
            self.stats.duplicates += 1;
            return Ok(());
        }

        if let Some(color) = known.color_of(&fingerprint) {
            self.stats.reused += 1;
            palette.insert(fingerprint, color);
            return Ok(());
        }

        match decode_tile(path, self.tile_size) {
            Ok(tile) => {
                self.stats.decoded += 1;
                palette.insert(fingerprint, AverageColor::of_image(&tile));
            }
            Err(e) if e.is_tile_recoverable() => {
                warn!("{e}; skipping tile");
                self.stats.skipped += 1;
                if self.delete_invalid {
                    self.delete_tile(path);
                }
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete_tile(&mut self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "deleted invalid tile");
                self.stats.deleted += 1;
            }
            Err(e) => warn!(path = %path.display(), "failed to delete invalid tile: {e}"),
        }
    }
}
