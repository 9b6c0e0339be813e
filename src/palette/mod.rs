//! Tile palette construction and persistence
//!
//! This module contains everything needed to turn a tile directory into a
//! searchable palette:
//! - Content fingerprints of tile files
//! - Average color computation and distance
//! - The persisted fingerprint to color cache and its reconciliation

/// Reconciliation of the persisted cache against the tile directory
pub mod cache;
/// Average color of a tile and color distance
pub mod color;
/// Tile directory enumeration
pub mod directory;
/// Content hashing of tile files
pub mod fingerprint;
/// Ordered palette and its text serialization
pub mod record;

pub use cache::{PaletteCache, ReconcileStats};
pub use color::AverageColor;
pub use fingerprint::TileFingerprint;
pub use record::{Palette, PaletteEntry};
