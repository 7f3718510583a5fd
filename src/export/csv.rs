//! CSV Export functionality
//!
//! One row per category with its limit, expense and over-budget flag.
//! Amounts are written as decimal strings.

use std::io::Write;

use super::SummaryExport;
use crate::error::TrackerResult;

/// Export the per-category rows to CSV
pub fn export_summary_csv<W: Write>(export: &SummaryExport, writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Category", "Limit", "Expense", "Over Budget", "Currency"])?;

    for category in &export.categories {
        let limit = category.limit.to_string();
        let expense = category.expense.to_string();
        csv_writer.write_record([
            category.name.as_str(),
            limit.as_str(),
            expense.as_str(),
            if category.over_budget { "yes" } else { "no" },
            export.currency.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
