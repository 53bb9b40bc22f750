//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring a media-list parse run.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_GLOBAL_MEDIA_FILE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for classified records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One JSON object per line
    Jsonl,
    /// Flat `category,url,site` rows with a header
    Csv,
}

/// How section headers are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMode {
    /// Only the permitted sections are accepted; `[global]` loads `global_file`
    /// and repeated sites are reported as collisions.
    Strict {
        /// Flat file injected for a `[global]` header
        global_file: PathBuf,
    },
    /// Any bracketed name is accepted as a category. No global file loading
    /// and no collision tracking.
    Flexible,
}

/// Configuration for one media-list parse run.
///
/// # Examples
///
/// ```
/// use media_classifier::config::ParserConfig;
///
/// let strict = ParserConfig::strict("lists/global");
/// assert!(!strict.is_flexible());
/// assert!(ParserConfig::flexible().is_flexible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Section handling mode
    pub mode: CategoryMode,
}

impl ParserConfig {
    /// Strict mode reading `[global]` entries from `global_file`.
    pub fn strict(global_file: impl Into<PathBuf>) -> Self {
        Self {
            mode: CategoryMode::Strict {
                global_file: global_file.into(),
            },
        }
    }

    /// Flexible mode: arbitrary category names, no collision reporting.
    pub fn flexible() -> Self {
        Self {
            mode: CategoryMode::Flexible,
        }
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self.mode, CategoryMode::Flexible)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::strict(DEFAULT_GLOBAL_MEDIA_FILE)
    }
}
