//! Raw URL dump filtering.
//!
//! Every crawl output directory holds a `__urls` dump with one requested URL
//! (or pseudo-URL) per line. This module reduces a dump to its unique hosts.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use colored::*;
use log::warn;

use crate::config::{ABOUT_BLANK, DATA_SCHEME, HTTPS_SCHEME, HTTP_SCHEME, MAX_HOSTNAME_LENGTH};
use crate::error_handling::ClassifyError;

/// Classification of one dump line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpLine<'a> {
    /// http(s) request; the text between the scheme and the first `/`
    Host(&'a str),
    /// `data:` or `about:blank`, carries no host
    Ignored,
    /// Any other scheme
    Unexpected,
}

/// Classifies a raw dump line by its scheme.
pub fn classify_dump_line(line: &str) -> DumpLine<'_> {
    let line = line.trim_end_matches(['\n', '\r']);

    if let Some(rest) = line
        .strip_prefix(HTTP_SCHEME)
        .or_else(|| line.strip_prefix(HTTPS_SCHEME))
    {
        return DumpLine::Host(rest.split('/').next().unwrap_or_default());
    }

    if line.starts_with(DATA_SCHEME) || line.starts_with(ABOUT_BLANK) {
        DumpLine::Ignored
    } else {
        DumpLine::Unexpected
    }
}

/// Cuts `host` to at most `MAX_HOSTNAME_LENGTH` characters.
pub fn truncate_host(host: &str) -> &str {
    match host.char_indices().nth(MAX_HOSTNAME_LENGTH) {
        Some((idx, _)) => &host[..idx],
        None => host,
    }
}

/// Unique hosts of one dump plus the number of unexpected-scheme lines dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpHosts {
    /// Hosts in first-seen order, truncated to `MAX_HOSTNAME_LENGTH`
    pub hosts: Vec<String>,
    /// Lines with a scheme other than http(s), `data:` or `about:blank`
    pub unexpected: usize,
}

/// Collects the unique hosts of a dump, in first-seen order.
///
/// Unexpected schemes are reported, counted and dropped; `source` names the
/// crawl directory in that report. Hosts are truncated after deduplication.
pub fn unique_hosts_from_lines<I>(source: &str, lines: I) -> DumpHosts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut dump = DumpHosts::default();

    for line in lines {
        let line = line.as_ref();
        match classify_dump_line(line) {
            DumpLine::Host(host) => {
                if seen.insert(host.to_string()) {
                    dump.hosts.push(truncate_host(host).to_string());
                }
            }
            DumpLine::Ignored => continue,
            DumpLine::Unexpected => {
                let notice = format!("Unexpected URL schema '{line}' from '{source}'");
                warn!("{}", notice.as_str().red());
                dump.unexpected += 1;
            }
        }
    }

    dump
}

/// Reads a dump file and returns its unique, truncated hosts.
///
/// Bytes that are not valid UTF-8 are replaced, so one undecodable line does
/// not cost the rest of the dump.
///
/// # Errors
///
/// Returns `ClassifyError::Io` if the dump cannot be read.
pub fn get_unique_urls(source_dir: &Path, dump_file: &Path) -> Result<DumpHosts, ClassifyError> {
    let bytes = fs::read(dump_file).map_err(|e| ClassifyError::io(dump_file, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(unique_hosts_from_lines(
        &source_dir.display().to_string(),
        content.lines(),
    ))
}
