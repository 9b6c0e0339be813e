//! Ordered fingerprint to color mapping and its persisted text form
//!
//! The cache file holds one field per line, alternating a hex fingerprint
//! and its average color as three space-separated numbers:
//!
//! ```text
//! 5f0c...e1
//! 12.5 200 31.25
//! ```

use crate::io::error::{MosaicError, Result, io_error};
use crate::palette::color::AverageColor;
use crate::palette::fingerprint::TileFingerprint;
use std::collections::HashMap;
use std::path::Path;

/// A tile fingerprint together with its average color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
    /// Content hash of the tile file
    pub fingerprint: TileFingerprint,
    /// Mean color of the decoded tile
    pub color: AverageColor,
}

/// Insertion-ordered palette with unique fingerprints
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    positions: HashMap<TileFingerprint, usize>,
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless its fingerprint is already present
    ///
    /// Returns `false` and leaves the palette untouched for a duplicate.
    pub fn insert(&mut self, fingerprint: TileFingerprint, color: AverageColor) -> bool {
        if self.positions.contains_key(&fingerprint) {
            return false;
        }
        self.positions.insert(fingerprint, self.entries.len());
        self.entries.push(PaletteEntry { fingerprint, color });
        true
    }

    /// Stored color for a fingerprint
    pub fn color_of(&self, fingerprint: &TileFingerprint) -> Option<AverageColor> {
        self.positions
            .get(fingerprint)
            .and_then(|&index| self.entries.get(index))
            .map(|entry| entry.color)
    }

    /// Whether the fingerprint is present
    pub fn contains(&self, fingerprint: &TileFingerprint) -> bool {
        self.positions.contains_key(fingerprint)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the persisted text form
    ///
    /// A repeated fingerprint keeps its first color. `path` is only used
    /// for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::CacheFormat`] if a fingerprint or color line is
    /// malformed or the last fingerprint has no color line
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let format_error = |line: usize, reason: String| MosaicError::CacheFormat {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let mut palette = Self::new();
        let mut lines = text.lines().enumerate();

        while let Some((index, fingerprint_line)) = lines.next() {
            let fingerprint: TileFingerprint = fingerprint_line
                .parse()
                .map_err(|e| format_error(index + 1, format!("invalid fingerprint: {e}")))?;

            let (color_index, color_line) = lines
                .next()
                .ok_or_else(|| format_error(index + 2, "missing color line".to_string()))?;
            let color: AverageColor = color_line
                .parse()
                .map_err(|e| format_error(color_index + 1, format!("invalid color: {e}")))?;

            palette.insert(fingerprint, color);
        }

        Ok(palette)
    }

    /// Serialize to the persisted text form, one field per line
    pub fn serialize(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.fingerprint.to_hex());
            text.push('\n');
            text.push_str(&entry.color.to_string());
            text.push('\n');
        }
        text
    }
}

/// Read the raw cache bytes, `None` if the file does not exist
///
/// The bytes are not required to be UTF-8; decoding is left to the caller.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub fn read_record(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, "read cache", e)),
    }
}

/// Overwrite the cache file with `text`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_record(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, "create directory", e))?;
    }
    std::fs::write(path, text).map_err(|e| io_error(path, "write cache", e))
}
