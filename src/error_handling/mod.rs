//! Error handling.
//!
//! This module provides the error types of the library:
//! - `ClassifyError` for media-list parsing and crawl output aggregation
//! - `InitializationError` for logger setup
//!
//! Fatal conditions are an invalid URL scheme in a media list, an invalid
//! section header in strict mode and unreadable input files. Everything else
//! is logged and skipped.

mod types;

// Re-export public API
pub use types::{ClassifyError, InitializationError};
