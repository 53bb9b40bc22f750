//! media_classifier library: media list classification and crawl host aggregation
//!
//! This library classifies categorized media lists by registrable domain and
//! annotates the hosts referenced by per-crawl output directories with their
//! Public Suffix List components.
//!
//! # Example
//!
//! ```no_run
//! use media_classifier::config::ParserConfig;
//! use media_classifier::domain::PslResolver;
//! use media_classifier::sections::{parse_media_list, CollisionTracker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lines = ["[national]", "http://www.example.co.uk/news"];
//! let parsed = parse_media_list(
//!     lines,
//!     &ParserConfig::flexible(),
//!     &PslResolver,
//!     CollisionTracker::new(),
//! )?;
//! assert_eq!(parsed.records[0].site(), "example.co.uk");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod dumps;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod sections;
pub mod sortify;
pub mod url;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{CategoryMode, ExportFormat, LogFormat, LogLevel, ParserConfig};
pub use domain::{DomainDecomposition, PslResolver, SuffixResolver};
pub use error_handling::ClassifyError;
pub use run::{run_classify, run_sortify, ClassifyOptions, ClassifyReport};
pub use sections::{ClassifiedUrl, CollisionTracker};
pub use sortify::HostnameReport;

// Entry points used by the CLI binary
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::{Path, PathBuf};

    use crate::config::{ExportFormat, ParserConfig};
    use crate::domain::SuffixResolver;
    use crate::export::{open_output, write_hostname_report, write_records};
    use crate::sections::{parse_media_file, CollisionTracker};
    use crate::sortify::{sortify, HostnameReport};

    /// Options for classifying one media list file.
    #[derive(Debug, Clone)]
    pub struct ClassifyOptions {
        /// Media list to parse
        pub file: PathBuf,
        /// Strict or flexible section handling
        pub parser: ParserConfig,
        /// Output format
        pub format: ExportFormat,
        /// Output file (stdout if None)
        pub output: Option<PathBuf>,
    }

    /// Summary of a classify run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClassifyReport {
        /// Records written
        pub records: usize,
        /// URLs whose site had already been seen (strict mode only)
        pub collisions: usize,
        /// Comment and noise lines skipped
        pub skipped: usize,
    }

    /// Parses a media list file and writes its records.
    ///
    /// # Errors
    ///
    /// Fails on an invalid section (strict mode), an invalid URL scheme, an
    /// unreadable media list or global file, or an output write error. Nothing
    /// is written when parsing fails.
    pub fn run_classify<R>(options: &ClassifyOptions, resolver: &R) -> Result<ClassifyReport>
    where
        R: SuffixResolver + ?Sized,
    {
        let parsed = parse_media_file(
            &options.file,
            &options.parser,
            resolver,
            CollisionTracker::new(),
        )
        .with_context(|| format!("Failed to classify {}", options.file.display()))?;

        let writer = open_output(options.output.as_deref())?;
        let records = write_records(&parsed.records, options.format, writer)?;

        let report = ClassifyReport {
            records,
            collisions: parsed.tracker.collisions().len(),
            skipped: parsed.skipped,
        };
        info!(
            "Classified {} URLs ({} already seen domains, {} lines skipped)",
            report.records, report.collisions, report.skipped
        );
        Ok(report)
    }

    /// Aggregates the hosts under a crawl output tree and writes them as JSON.
    pub fn run_sortify<R>(
        output_dir: &Path,
        output: Option<&Path>,
        resolver: &R,
    ) -> Result<HostnameReport>
    where
        R: SuffixResolver + ?Sized,
    {
        let report = sortify(output_dir, resolver)
            .with_context(|| format!("Failed to aggregate {}", output_dir.display()))?;
        let writer = open_output(output)?;
        write_hostname_report(&report, writer)?;
        Ok(report)
    }
}
