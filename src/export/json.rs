//! JSON Export functionality
//!
//! Writes the run summary as pretty-printed JSON.

use std::io::Write;

use super::SummaryExport;
use crate::error::TrackerResult;

/// Export the summary to JSON
pub fn export_summary_json<W: Write>(export: &SummaryExport, writer: &mut W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)?;
    writeln!(writer)?;
    Ok(())
}
