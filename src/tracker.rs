//! Tracker pipeline
//!
//! Runs the stages of one session in order: category setup, welcome banner,
//! expense collection, summary, budget alerts and the optional export.

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::{Settings, Variant};
use crate::display::{format_alerts, format_summary, format_welcome, Layout};
use crate::error::TrackerResult;
use crate::export::{write_export, SummaryExport};
use crate::models::ExpenseSheet;
use crate::reports::{BudgetAlertReport, ExpenseSummary};
use crate::services::ExpenseCollector;
use crate::setup::{CategorySource, FixedPreset, InteractiveSetup, Prompter};

/// Everything computed during one session
#[derive(Debug, Clone)]
pub struct TrackerRun {
    pub sheet: ExpenseSheet,
    pub summary: ExpenseSummary,
    pub alerts: BudgetAlertReport,
}

/// Run a full session against the given console
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<TrackerRun> {
    settings.validate()?;
    let layout = Layout::for_variant(settings.variant, settings.currency.as_str());
    info!(variant = ?settings.variant, currency = %settings.currency, "starting session");

    let plan = match settings.variant {
        Variant::Fixed => FixedPreset.load(prompter)?,
        Variant::Configurable => InteractiveSetup::new(&layout).load(prompter)?,
    };

    prompter.say(&format_welcome(&layout, &plan))?;

    let sheet = ExpenseCollector::new(&layout).collect(prompter, plan)?;

    let summary = ExpenseSummary::generate(&sheet);
    info!(total = %summary.total, average = %summary.average, "summary computed");
    prompter.say(&format_summary(&layout, &sheet, &summary))?;

    let alerts = BudgetAlertReport::check(&sheet);
    info!(over_budget = alerts.over_budget_count(), "budget check complete");
    prompter.say(&format_alerts(&layout, &alerts))?;

    if let Some(format) = settings.export {
        let export = SummaryExport::new(&settings.currency, &sheet, &summary, &alerts);
        let writer = prompter.writer_mut();
        write_export(format, &export, &mut *writer)?;
        writer.flush()?;
    }

    Ok(TrackerRun {
        sheet,
        summary,
        alerts,
    })
}
