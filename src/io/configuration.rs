//! Mosaic constants and runtime configuration defaults

use std::path::PathBuf;

/// Edge length in pixels of every tile image
pub const TILE_SIZE: u32 = 48;

/// Directory scanned for tile images
pub const DEFAULT_TILE_DIRECTORY: &str = "mosaics";

/// Location of the persisted palette cache
pub const DEFAULT_CACHE_PATH: &str = "cache";

// Keeps empty tile directories under version control
/// Placeholder file ignored while scanning the tile directory
pub const PLACEHOLDER_FILENAME: &str = ".gitkeep";

/// Read buffer size used when fingerprinting tile files
pub const HASH_CHUNK_SIZE: usize = 4096;

/// Fill color for output pixels not covered by a tile
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

/// File name of the preview written when no output path is given
pub const PREVIEW_FILENAME: &str = "photomosaic_preview.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Runtime settings shared by the palette cache and the mosaic pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Directory containing the tile images
    pub tile_directory: PathBuf,
    /// Persisted palette cache file
    pub cache_path: PathBuf,
    /// Required tile width and height in pixels
    pub tile_size: u32,
    /// Skip the placeholder file while scanning
    pub skip_placeholder: bool,
    /// Name of the placeholder file
    pub placeholder_name: String,
    /// Remove tiles that fail decoding or validation
    pub delete_invalid: bool,
    /// Output background color
    pub background: [u8; 3],
    /// Render progress bars
    pub show_progress: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_directory: PathBuf::from(DEFAULT_TILE_DIRECTORY),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            tile_size: TILE_SIZE,
            skip_placeholder: true,
            placeholder_name: PLACEHOLDER_FILENAME.to_string(),
            delete_invalid: false,
            background: BACKGROUND_COLOR,
            show_progress: true,
        }
    }
}

impl MosaicConfig {
    /// Configuration rooted at a specific tile directory and cache file
    pub fn with_paths(tile_directory: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            tile_directory: tile_directory.into(),
            cache_path: cache_path.into(),
            ..Self::default()
        }
    }

    /// Placeholder name to skip, if skipping is enabled
    pub fn placeholder(&self) -> Option<&str> {
        self.skip_placeholder
            .then_some(self.placeholder_name.as_str())
    }
}
