//! Error type definitions.
//!
//! This module defines the error types surfaced by the library. Conditions the
//! crawl pipeline tolerates (unreadable dumps, unexpected dump schemes, domain
//! collisions) are logged where they happen and never become errors.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while classifying media lists or aggregating crawl output.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// A media list line does not start with `http://` or `https://`.
    #[error("Invalid protocol in: {0}")]
    InvalidScheme(String),

    /// A section header names a section outside the permitted set (strict mode).
    #[error("The section in [{section}] is invalid: does not match with {permitted:?}")]
    InvalidSection {
        /// The rejected section name
        section: String,
        /// The permitted section names
        permitted: Vec<String>,
    },

    /// A media list, global file, dump file or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ClassifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClassifyError::Io {
            path: path.into(),
            source,
        }
    }
}
