//! Loading of the tiles a mask actually references

use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_tile;
use crate::mosaic::matcher::Mask;
use crate::palette::directory::TileDirectory;
use crate::palette::fingerprint::{TileFingerprint, fingerprint_file};
use image::RgbImage;
use indicatif::ProgressBar;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// Decoded tiles keyed by fingerprint
#[derive(Debug, Default)]
pub struct LoadedTileSet {
    tiles: HashMap<TileFingerprint, RgbImage>,
}

impl LoadedTileSet {
    /// Decoded tile for a fingerprint
    pub fn get(&self, fingerprint: &TileFingerprint) -> Option<&RgbImage> {
        self.tiles.get(fingerprint)
    }

    /// Whether a fingerprint was loaded
    pub fn contains(&self, fingerprint: &TileFingerprint) -> bool {
        self.tiles.contains_key(fingerprint)
    }

    /// Number of loaded tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add a decoded tile
    pub fn insert(&mut self, fingerprint: TileFingerprint, tile: RgbImage) {
        self.tiles.insert(fingerprint, tile);
    }
}

/// Load each distinct tile referenced by the mask exactly once
///
/// Fingerprints are resolved by re-hashing the tile directory; scanning
/// stops as soon as every referenced tile is decoded. Unreadable files that
/// the mask does not need are ignored.
///
/// # Errors
///
/// Returns an error if the tile directory cannot be read, or
/// [`MosaicError::MissingTile`] if a referenced fingerprint has no
/// decodable file
pub fn load_used_tiles(
    directory: &TileDirectory,
    mask: &Mask,
    tile_size: u32,
    progress: &ProgressBar,
) -> Result<LoadedTileSet> {
    info!("loading used tiles");
    let mut pending: BTreeSet<TileFingerprint> = mask.distinct().into_iter().collect();
    progress.set_length(pending.len() as u64);

    let mut loaded = LoadedTileSet::default();
    for path in directory.tile_paths()? {
        if pending.is_empty() {
            break;
        }

        let fingerprint = match fingerprint_file(&path) {
            Ok(fingerprint) => fingerprint,
            Err(e) => {
                debug!("{e}; ignoring file");
                continue;
            }
        };
        if !pending.contains(&fingerprint) {
            continue;
        }

        match decode_tile(&path, tile_size) {
            Ok(tile) => {
                pending.remove(&fingerprint);
                loaded.insert(fingerprint, tile);
                progress.inc(1);
            }
            Err(e) => warn!("{e}; referenced tile unusable"),
        }
    }
    progress.finish_and_clear();

    if let Some(missing) = pending.first() {
        return Err(MosaicError::MissingTile {
            fingerprint: missing.to_hex(),
        });
    }

    info!(tiles = loaded.len(), "finished loading used tiles");
    Ok(loaded)
}
