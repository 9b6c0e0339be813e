//! Tests for tile directory enumeration

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::configuration::{MosaicConfig, PLACEHOLDER_FILENAME};
    use photomosaic::palette::directory::TileDirectory;
    use std::fs;
    use tempfile::TempDir;

    fn populated_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join(PLACEHOLDER_FILENAME), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.png"), b"c").unwrap();
        dir
    }

    // Tests files are sorted and placeholder and subdirectories skipped
    // Verified by returning raw read_dir order
    #[test]
    fn test_tile_paths_sorted_and_filtered() {
        let dir = populated_dir();
        let tiles = TileDirectory::new(dir.path(), Some(PLACEHOLDER_FILENAME));

        let names: Vec<String> = tiles
            .tile_paths()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    // Tests placeholder is listed when skipping is disabled
    // Verified by always skipping the placeholder
    #[test]
    fn test_placeholder_kept_when_not_skipped() {
        let dir = populated_dir();
        let config = MosaicConfig {
            skip_placeholder: false,
            ..MosaicConfig::with_paths(dir.path(), dir.path().join("cache"))
        };

        let paths = TileDirectory::from_config(&config).tile_paths().unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().any(|p| p.ends_with(PLACEHOLDER_FILENAME)));
    }

    // Tests config with default settings skips the placeholder
    // Verified by ignoring skip_placeholder in from_config
    #[test]
    fn test_from_config_skips_placeholder() {
        let dir = populated_dir();
        let config = MosaicConfig::with_paths(dir.path(), dir.path().join("cache"));
        let tiles = TileDirectory::from_config(&config);

        assert_eq!(tiles.root(), dir.path());
        assert_eq!(tiles.tile_paths().unwrap().len(), 2);
    }

    // Tests a missing directory is an I/O error
    // Verified by returning an empty listing instead
    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let tiles = TileDirectory::new(dir.path().join("absent"), None);

        assert!(matches!(tiles.tile_paths(), Err(MosaicError::Io { .. })));
    }
}
