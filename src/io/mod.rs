/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Image decoding, validation and export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Stage progress bars
pub mod progress;
