//! Mosaic generation from a reconciled palette
//!
//! This module contains the per-pixel matching, selective tile loading and
//! image assembly stages, plus the pipeline that chains them.

/// Output image composition
pub mod assembler;
/// Loading of referenced tiles only
pub mod loader;
/// Nearest palette color search
pub mod matcher;
/// End-to-end run orchestration
pub mod pipeline;

pub use loader::LoadedTileSet;
pub use matcher::{Mask, SourcePixelGrid};
pub use pipeline::{MosaicOutcome, MosaicPipeline};
