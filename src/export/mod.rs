//! Export module for the expense tracker
//!
//! Provides a machine-readable copy of the run's results in several formats:
//! - JSON: for scripts and other tools
//! - YAML: human-readable structured output
//! - CSV: one row per category (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::ExportFormat;
use crate::error::TrackerResult;
use crate::models::{ExpenseSheet, Money};
use crate::reports::{BudgetAlertReport, ExpenseSummary};

pub use self::csv::export_summary_csv;
pub use json::export_summary_json;
pub use yaml::export_summary_yaml;

/// One category row of the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExport {
    pub name: String,
    pub limit: Money,
    pub expense: Money,
    pub over_budget: bool,
}

/// Results of one run in serializable form
///
/// Amounts are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Currency label the amounts are in
    pub currency: String,
    /// Every category in entry order
    pub categories: Vec<CategoryExport>,
    pub total: Money,
    pub average: Money,
    /// Name of the category with the highest expense
    pub highest: String,
    /// Name of the category with the lowest expense
    pub lowest: String,
    pub over_budget_count: usize,
}

impl SummaryExport {
    pub fn new(
        currency: &str,
        sheet: &ExpenseSheet,
        summary: &ExpenseSummary,
        alerts: &BudgetAlertReport,
    ) -> Self {
        let categories = sheet
            .entries()
            .enumerate()
            .map(|(index, (category, expense))| CategoryExport {
                name: category.name.clone(),
                limit: category.limit,
                expense,
                over_budget: alerts.is_flagged(index),
            })
            .collect();

        let names = sheet.categories();
        Self {
            currency: currency.to_string(),
            categories,
            total: summary.total,
            average: summary.average,
            highest: names[summary.highest].name.clone(),
            lowest: names[summary.lowest].name.clone(),
            over_budget_count: alerts.over_budget_count(),
        }
    }
}

/// Write `export` in the requested format
pub fn write_export<W: Write>(
    format: ExportFormat,
    export: &SummaryExport,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Json => export_summary_json(export, writer),
        ExportFormat::Yaml => export_summary_yaml(export, writer),
        ExportFormat::Csv => export_summary_csv(export, writer),
    }
}
