//! Input/output operations and error handling

/// Command-line interface and batch dungeon processing
pub mod cli;
/// Defaults and tuning constants
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG rendering of finished layouts
pub mod image;
/// Batch progress display
pub mod progress;
/// ASCII rendering of finished layouts
pub mod text;
