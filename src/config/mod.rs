//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (permitted sections, file names, limits)
//! - Parser configuration (strict vs. flexible category mode)
//! - Logging and export option types shared by the library and CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CategoryMode, ExportFormat, LogFormat, LogLevel, ParserConfig};
