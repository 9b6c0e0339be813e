//! Tests for mosaic configuration constants and defaults

#[cfg(test)]
mod tests {
    use photomosaic::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_CACHE_PATH, DEFAULT_TILE_DIRECTORY, HASH_CHUNK_SIZE,
        MosaicConfig, PLACEHOLDER_FILENAME, PREVIEW_FILENAME, TILE_SIZE,
    };
    use std::path::PathBuf;

    // Tests tile size value
    // Verified by changing tile size
    #[test]
    fn test_tile_size_value() {
        assert_eq!(TILE_SIZE, 48);
    }

    // Tests default locations of tiles and cache
    // Verified by changing default paths
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_TILE_DIRECTORY, "mosaics");
        assert_eq!(DEFAULT_CACHE_PATH, "cache");
        assert_eq!(PLACEHOLDER_FILENAME, ".gitkeep");
    }

    // Tests hashing chunk size
    // Verified by changing chunk size
    #[test]
    fn test_hash_chunk_size() {
        assert_eq!(HASH_CHUNK_SIZE, 4096);
    }

    // Tests background is white
    // Verified by changing background color
    #[test]
    fn test_background_color() {
        assert_eq!(BACKGROUND_COLOR, [255, 255, 255]);
    }

    // Tests preview file is a PNG
    // Verified by changing preview extension
    #[test]
    fn test_preview_filename() {
        assert!(PREVIEW_FILENAME.ends_with(".png"));
    }

    // Tests default configuration uses the constants
    // Verified by altering a default field
    #[test]
    fn test_default_config() {
        let config = MosaicConfig::default();

        assert_eq!(config.tile_directory, PathBuf::from(DEFAULT_TILE_DIRECTORY));
        assert_eq!(config.cache_path, PathBuf::from(DEFAULT_CACHE_PATH));
        assert_eq!(config.tile_size, TILE_SIZE);
        assert!(config.skip_placeholder);
        assert!(!config.delete_invalid);
        assert_eq!(config.background, BACKGROUND_COLOR);
        assert!(config.show_progress);
    }

    // Tests placeholder lookup honours skip_placeholder
    // Verified by ignoring the skip flag
    #[test]
    fn test_placeholder() {
        let config = MosaicConfig::with_paths("tiles", "cache_file");
        assert_eq!(config.placeholder(), Some(PLACEHOLDER_FILENAME));
        assert_eq!(config.tile_directory, PathBuf::from("tiles"));

        let keep_all = MosaicConfig {
            skip_placeholder: false,
            ..config
        };
        assert_eq!(keep_all.placeholder(), None);
    }
}
