//! Enumeration of tile files

use crate::io::configuration::MosaicConfig;
use crate::io::error::{Result, io_error};
use std::path::{Path, PathBuf};

/// A directory of tile images
#[derive(Debug, Clone)]
pub struct TileDirectory {
    root: PathBuf,
    placeholder: Option<String>,
}

impl TileDirectory {
    /// Scan `root`, ignoring a file called `placeholder` if given
    pub fn new(root: impl Into<PathBuf>, placeholder: Option<&str>) -> Self {
        Self {
            root: root.into(),
            placeholder: placeholder.map(str::to_string),
        }
    }

    /// Tile directory described by a configuration
    pub fn from_config(config: &MosaicConfig) -> Self {
        Self::new(&config.tile_directory, config.placeholder())
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Regular files in the directory, sorted by file name
    ///
    /// Sorting gives every run the same palette order regardless of how the
    /// platform orders directory entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or one of its entries cannot be read
    pub fn tile_paths(&self) -> Result<Vec<PathBuf>> {
        let entries =
            std::fs::read_dir(&self.root).map_err(|e| io_error(&self.root, "read directory", e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| io_error(&self.root, "read directory entry", e))?
                .path();
            if path.is_file() && !self.is_placeholder(&path) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn is_placeholder(&self, path: &Path) -> bool {
        match (&self.placeholder, path.file_name()) {
            (Some(placeholder), Some(name)) => name == placeholder.as_str(),
            _ => false,
        }
    }
}
