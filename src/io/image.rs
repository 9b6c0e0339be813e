//! Image codec boundary: decoding with validation, resizing and PNG export

use crate::io::error::{MosaicError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::path::Path;

// Bicubic, matching the usual default of image editors
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Decode an image and require 8-bit RGB
///
/// When `target_size` is given the image is resized to exactly those
/// dimensions before the color type check.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image is not 8-bit RGB
pub fn decode_rgb(path: &Path, target_size: Option<(u32, u32)>) -> Result<RgbImage> {
    let mut img = image::open(path).map_err(|e| MosaicError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some((width, height)) = target_size {
        img = img.resize_exact(width, height, RESIZE_FILTER);
    }

    match img {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other => Err(MosaicError::UnsupportedColorType {
            path: path.to_path_buf(),
            color_type: format!("{:?}", other.color()),
        }),
    }
}

/// Decode a tile and check it is exactly `tile_size` x `tile_size` RGB
///
/// # Errors
///
/// Returns an error if decoding fails, the image is not RGB, or its
/// dimensions differ from the tile size
pub fn decode_tile(path: &Path, tile_size: u32) -> Result<RgbImage> {
    let tile = decode_rgb(path, None)?;
    let actual = tile.dimensions();
    if actual != (tile_size, tile_size) {
        return Err(MosaicError::SizeValidation {
            path: path.to_path_buf(),
            expected: (tile_size, tile_size),
            actual,
        });
    }
    Ok(tile)
}

/// Load the source image, optionally resized, without any size requirement
///
/// # Errors
///
/// Returns an error if decoding fails, the image is not RGB, or it has a
/// zero dimension
pub fn load_source(path: &Path, resize: Option<(u32, u32)>) -> Result<RgbImage> {
    let source = decode_rgb(path, resize)?;
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::SizeValidation {
            path: path.to_path_buf(),
            expected: (width.max(1), height.max(1)),
            actual: (width, height),
        });
    }
    Ok(source)
}

/// Write an RGB image, creating parent directories as needed
///
/// The encoder is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or encoding fails
pub fn save_rgb(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
