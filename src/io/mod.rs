//! Input/output operations, configuration and error handling

/// Command-line parsing and output orchestration
pub mod cli;
/// Tuning constants and defaults
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// Layout stream (GDSII) writer
pub mod gds;
/// PNG preview rendering
pub mod image;
/// Block descriptor (LEF) writer
pub mod lef;
/// Stage progress display for interactive runs
pub mod progress;
