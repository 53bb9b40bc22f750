//! Export functionality.
//!
//! This module writes classification results for downstream tooling:
//! - classified media-list records as JSONL or CSV
//! - crawl hostname reports as a pretty-printed JSON object

mod csv;
mod jsonl;
mod output;

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::ExportFormat;
use crate::sections::ClassifiedUrl;
use crate::sortify::HostnameReport;

pub use self::csv::write_records_csv;
pub use jsonl::write_records_jsonl;
pub use output::open_output;

/// Writes records in the requested format, returning the record count.
pub fn write_records<W: Write>(
    records: &[ClassifiedUrl],
    format: ExportFormat,
    writer: W,
) -> Result<usize> {
    match format {
        ExportFormat::Jsonl => write_records_jsonl(records, writer),
        ExportFormat::Csv => write_records_csv(records, writer),
    }
}

/// Writes `{hostname: {subdomain, domain, tld}}` as pretty JSON.
pub fn write_hostname_report<W: Write>(report: &HostnameReport, mut writer: W) -> Result<usize> {
    serde_json::to_writer_pretty(&mut writer, &report.hosts)
        .context("Failed to serialize hostname report")?;
    writer
        .write_all(b"\n")
        .context("Failed to write hostname report")?;
    writer.flush().context("Failed to flush output")?;
    Ok(report.hosts.len())
}
