//! Photomosaic generation backed by a content-hashed tile palette cache
//!
//! Tile images are fingerprinted by content and their average colors are
//! cached between runs. Every pixel of the source image is replaced by the
//! tile whose average color is closest, and only the tiles actually used are
//! decoded to build the output.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Matching, tile loading and mosaic assembly
pub mod mosaic;
/// Tile fingerprints, average colors and the palette cache
pub mod palette;

pub use io::error::{MosaicError, Result};
