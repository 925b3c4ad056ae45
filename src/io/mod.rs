//! Input/output operations and error handling
//!
//! Everything that touches the world outside the generative core: the
//! command-line interface, scene exchange files, PNG rendering, progress
//! display and the crate-wide error type.

/// Command-line interface and run orchestration
pub mod cli;
/// Tuning constants and runtime defaults
pub mod configuration;
/// Error types for generator operations
pub mod error;
/// Progress display for the rendering pass
pub mod progress;
/// Scene rasterization and PNG export
pub mod render;
/// Scene JSON export and validated import
pub mod scene_file;
