//! Crawl output aggregation.
//!
//! Walks a tree of per-crawl output directories, collects the unique hosts of
//! every `__urls` dump and annotates each host with its PSL components.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::URL_DUMP_FILE_NAME;
use crate::domain::{DomainDecomposition, SuffixResolver};
use crate::dumps::get_unique_urls;
use crate::error_handling::ClassifyError;

/// Hosts found under a crawl output tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostnameReport {
    /// Host (port removed) to its decomposition
    pub hosts: BTreeMap<String, DomainDecomposition>,
    /// Host occurrences skipped because the host was already resolved
    pub skipped: usize,
    /// Dump files read successfully
    pub directories: usize,
    /// Dump lines dropped for an unexpected scheme
    pub unexpected_schemes: usize,
}

/// Removes a `:port` suffix. Bracketed IPv6 literals keep their brackets.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        if let Some(end) = host.find(']') {
            return &host[..=end];
        }
    }
    host.split(':').next().unwrap_or_default()
}

/// Aggregates the hosts referenced by every crawl under `output_dir`.
///
/// Directories without a `__urls` dump are ignored; an unreadable dump
/// (including a dangling link) is logged and its directory skipped. Each host is resolved once per call.
///
/// # Errors
///
/// Returns `ClassifyError::Io` if `output_dir` is not a readable directory.
pub fn sortify<R>(output_dir: &Path, resolver: &R) -> Result<HostnameReport, ClassifyError>
where
    R: SuffixResolver + ?Sized,
{
    if !output_dir.is_dir() {
        return Err(ClassifyError::io(
            output_dir,
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut report = HostnameReport::default();

    let dumps = WalkDir::new(output_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable path under {}: {}", output_dir.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir() && entry.file_name() == URL_DUMP_FILE_NAME);

    for entry in dumps {
        let dump_file = entry.path();
        let crawl_dir = dump_file.parent().unwrap_or(output_dir);

        let dump = match get_unique_urls(crawl_dir, dump_file) {
            Ok(dump) => dump,
            Err(e) => {
                warn!("Skipping {}: {}", crawl_dir.display(), e);
                continue;
            }
        };
        report.directories += 1;
        report.unexpected_schemes += dump.unexpected;

        for dirty_host in dump.hosts {
            let host = strip_port(&dirty_host);
            if report.hosts.contains_key(host) {
                report.skipped += 1;
                continue;
            }
            report
                .hosts
                .insert(host.to_string(), resolver.resolve(host));
        }
        debug!(
            "Aggregated {} ({} hosts so far)",
            crawl_dir.display(),
            report.hosts.len()
        );
    }

    info!(
        "Collected {} unique hosts from {} crawl directories ({} repeated, {} unexpected schemes)",
        report.hosts.len(),
        report.directories,
        report.skipped,
        report.unexpected_schemes
    );
    Ok(report)
}
