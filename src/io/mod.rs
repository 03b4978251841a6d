//! Input/output operations, configuration and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Solver constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Printable text rendering of boards
pub mod format;
/// PNG export of solved boards
pub mod image;
/// Progress display per rectangle size
pub mod progress;
