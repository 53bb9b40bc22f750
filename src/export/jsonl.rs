//! JSONL export functionality.
//!
//! One JSON object per classified record: `{"category": ..., "url": ..., "site": ...}`.
//! Records without a section carry `"category": null`.

use anyhow::{Context, Result};
use std::io::Write;

use crate::sections::ClassifiedUrl;

/// Writes records as JSON Lines.
///
/// # Returns
///
/// Returns the number of records written.
pub fn write_records_jsonl<W: Write>(records: &[ClassifiedUrl], mut writer: W) -> Result<usize> {
    for record in records {
        serde_json::to_writer(&mut writer, record).context("Failed to serialize record")?;
        writer.write_all(b"\n").context("Failed to write record")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(records.len())
}
