//! CSV export functionality.
//!
//! Flat `category,url,site` rows with a header. A record without a section
//! has an empty category field.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use crate::sections::ClassifiedUrl;

/// Writes records as CSV.
///
/// # Returns
///
/// Returns the number of records written (header excluded).
pub fn write_records_csv<W: Write>(records: &[ClassifiedUrl], writer: W) -> Result<usize> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer
        .write_record(["category", "url", "site"])
        .context("Failed to write CSV header")?;

    for record in records {
        let category = record.category().map(|c| c.as_str()).unwrap_or_default();
        csv_writer
            .write_record([category, record.url(), record.site()])
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}
