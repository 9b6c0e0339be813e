//! Nearest palette color search for every source pixel

use crate::palette::fingerprint::TileFingerprint;
use crate::palette::record::{Palette, PaletteEntry};
use image::RgbImage;
use indicatif::ProgressBar;
use ndarray::{Array2, Zip};
use std::collections::HashSet;

/// Source pixels indexed by (`row`, `col`)
pub type SourcePixelGrid = Array2<[u8; 3]>;

/// Convert an RGB image into a pixel grid of the same dimensions
pub fn pixel_grid(img: &RgbImage) -> SourcePixelGrid {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        img.get_pixel(col as u32, row as u32).0
    })
}

/// Per-pixel tile assignment, same dimensions as the source grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Array2<TileFingerprint>,
}

impl Mask {
    /// Wrap an assignment array indexed by (`row`, `col`)
    pub const fn from_cells(cells: Array2<TileFingerprint>) -> Self {
        Self { cells }
    }

    /// Assigned fingerprint at a grid position
    pub fn get(&self, row: usize, col: usize) -> Option<&TileFingerprint> {
        self.cells.get((row, col))
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Underlying assignment array
    pub const fn cells(&self) -> &Array2<TileFingerprint> {
        &self.cells
    }

    /// Distinct fingerprints in row-major order of first appearance
    pub fn distinct(&self) -> Vec<TileFingerprint> {
        let mut seen = HashSet::new();
        self.cells
            .iter()
            .filter(|fingerprint| seen.insert(**fingerprint))
            .copied()
            .collect()
    }
}

/// Entry closest to `pixel`, the earliest one on ties
///
/// Returns `None` only for an empty palette.
pub fn nearest_entry(pixel: [u8; 3], entries: &[PaletteEntry]) -> Option<&PaletteEntry> {
    let (first, rest) = entries.split_first()?;
    Some(nearest_from(pixel, first, rest))
}

// Strict comparison keeps the earliest entry on ties
fn nearest_from<'a>(
    pixel: [u8; 3],
    first: &'a PaletteEntry,
    rest: &'a [PaletteEntry],
) -> &'a PaletteEntry {
    let mut best = first;
    let mut best_distance = first.color.distance_to(pixel);
    for entry in rest {
        let distance = entry.color.distance_to(pixel);
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }
    best
}

/// Assign every source pixel the fingerprint of its nearest palette entry
///
/// Cells are computed independently; the result only depends on the grid
/// and the palette order. Returns `None` when the palette is empty.
pub fn match_palette(grid: &SourcePixelGrid, palette: &Palette) -> Option<Mask> {
    match_palette_with_progress(grid, palette, &ProgressBar::hidden())
}

/// [`match_palette`] reporting one progress unit per grid row
pub fn match_palette_with_progress(
    grid: &SourcePixelGrid,
    palette: &Palette,
    progress: &ProgressBar,
) -> Option<Mask> {
    let (first, rest) = palette.entries().split_first()?;
    progress.set_length(grid.nrows() as u64);

    let cells = Zip::indexed(grid).map_collect(|(_, col), &pixel| {
        if col == 0 {
            progress.inc(1);
        }
        nearest_from(pixel, first, rest).fingerprint
    });
    progress.finish_and_clear();

    Some(Mask::from_cells(cells))
}
