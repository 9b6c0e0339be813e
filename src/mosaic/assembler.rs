//! Composition of the output image from the mask and loaded tiles

use crate::mosaic::loader::LoadedTileSet;
use crate::mosaic::matcher::Mask;
use image::{Rgb, RgbImage, imageops};
use indicatif::ProgressBar;

/// Output dimensions in pixels for a mask and tile size
pub fn output_dimensions(mask: &Mask, tile_size: u32) -> (u32, u32) {
    (
        (mask.cols() as u32).saturating_mul(tile_size),
        (mask.rows() as u32).saturating_mul(tile_size),
    )
}

/// Paste the tile of each mask cell at (`col`, `row`) scaled by `tile_size`
///
/// The canvas starts filled with `background`. Tiles are copied verbatim.
pub fn assemble(
    mask: &Mask,
    tiles: &LoadedTileSet,
    tile_size: u32,
    background: [u8; 3],
    progress: &ProgressBar,
) -> RgbImage {
    let (width, height) = output_dimensions(mask, tile_size);
    let mut output = RgbImage::from_pixel(width, height, Rgb(background));
    progress.set_length(mask.rows() as u64);

    for ((row, col), fingerprint) in mask.cells().indexed_iter() {
        if let Some(tile) = tiles.get(fingerprint) {
            let x = i64::from(col as u32) * i64::from(tile_size);
            let y = i64::from(row as u32) * i64::from(tile_size);
            imageops::replace(&mut output, tile, x, y);
        }
        if col + 1 == mask.cols() {
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    output
}
