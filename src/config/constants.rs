//! Configuration constants.
//!
//! This module defines the constants shared by the media-list parser and the
//! crawl output aggregator: permitted section names, well-known file names and
//! size limits.

/// Section names accepted in strict (non-flexible) mode.
///
/// Kept in the same order as [`crate::sections::Section`] so error messages list
/// them the way media list authors expect.
pub const PERMITTED_SECTIONS: [&str; 7] = [
    "global", "national", "local", "blog", "removed", "special", "all",
];

/// Flat file loaded when a strict media list contains a `[global]` header.
pub const DEFAULT_GLOBAL_MEDIA_FILE: &str = "special_media/global";

/// Name of the raw URL dump written into every per-crawl output directory.
pub const URL_DUMP_FILE_NAME: &str = "__urls";

/// Hostnames longer than this (in characters) are truncated before resolution.
pub const MAX_HOSTNAME_LENGTH: usize = 4096;

/// Lines shorter than this after space truncation are treated as noise.
pub const MIN_LINE_LENGTH: usize = 3;

/// Schemes accepted by the URL normalizer and the dump filter.
pub const HTTP_SCHEME: &str = "http://";
pub const HTTPS_SCHEME: &str = "https://";

// Pseudo-URLs recorded by the crawler that carry no hostname
pub const DATA_SCHEME: &str = "data:";
pub const ABOUT_BLANK: &str = "about:blank";
