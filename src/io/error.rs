//! Error types for palette reconciliation and mosaic generation

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all mosaic operations
#[derive(Debug, Error)]
pub enum MosaicError {
    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    Io {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Image could not be opened or decoded
    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image decoded to a color type other than 8-bit RGB
    #[error("Unsupported color type {color_type} in '{}' (expected RGB)", path.display())]
    UnsupportedColorType {
        /// Path to the image file
        path: PathBuf,
        /// Debug name of the decoded color type
        color_type: String,
    },

    /// Image dimensions differ from the required tile size
    #[error(
        "Invalid image size in '{}': expected {}x{}, found {}x{}",
        path.display(),
        expected.0,
        expected.1,
        actual.0,
        actual.1
    )]
    SizeValidation {
        /// Path to the image file
        path: PathBuf,
        /// Required (width, height)
        expected: (u32, u32),
        /// Decoded (width, height)
        actual: (u32, u32),
    },

    /// Reconciliation left no usable tiles
    #[error("No usable tiles found in '{}'", directory.display())]
    EmptyPalette {
        /// Tile directory that was scanned
        directory: PathBuf,
    },

    /// Mask references a fingerprint that no readable tile file produces
    #[error("No decodable tile file matches fingerprint {fingerprint}")]
    MissingTile {
        /// Hex encoded fingerprint
        fingerprint: String,
    },

    /// Persisted cache could not be parsed
    #[error("Malformed cache file '{}' at line {line}: {reason}", path.display())]
    CacheFormat {
        /// Cache file path
        path: PathBuf,
        /// One-based line number of the offending field
        line: usize,
        /// What was wrong with the field
        reason: String,
    },

    /// Failed to save the generated mosaic to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl MosaicError {
    /// Whether this failure only disqualifies a single tile
    ///
    /// Reconciliation skips (and optionally deletes) the tile instead of
    /// aborting the run when this returns `true`.
    pub const fn is_tile_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Decode { .. }
                | Self::UnsupportedColorType { .. }
                | Self::SizeValidation { .. }
        )
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an I/O error bound to a path and operation
pub fn io_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::Io {
        path: path.into(),
        operation,
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
