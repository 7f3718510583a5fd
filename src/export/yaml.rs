//! YAML Export functionality
//!
//! Writes the run summary as a YAML document.

use std::io::Write;

use super::SummaryExport;
use crate::error::TrackerResult;

/// Export the summary to YAML
pub fn export_summary_yaml<W: Write>(export: &SummaryExport, writer: &mut W) -> TrackerResult<()> {
    serde_yaml::to_writer(&mut *writer, export)?;
    Ok(())
}
