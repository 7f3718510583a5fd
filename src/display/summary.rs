//! Report section rendering
//!
//! Formats the welcome banner, the expense summary table and the budget alert
//! report as plain text.

use super::layout::{Layout, ALERT_RULE_WIDTH, BANNER_WIDTH, SUMMARY_NAME_WIDTH};
use super::report::{labelled_line, rule};
use crate::models::{BudgetPlan, ExpenseSheet};
use crate::reports::{BudgetAlertReport, ExpenseSummary};

/// Shown instead of alerts when every category is within its limit
pub const WITHIN_BUDGET_MESSAGE: &str =
    "- All expenses are within budget limits. Excellent financial management!";

/// Title banner followed by the budget limit of every category
pub fn format_welcome(layout: &Layout, plan: &BudgetPlan) -> String {
    let banner = rule('=', BANNER_WIDTH);
    let mut output = String::new();

    if layout.banner_leading_blank {
        output.push('\n');
    }
    output.push_str(&format!(
        "{banner}\n   MONTHLY EXPENSE TRACKER WITH BUDGET ALERTS\n{banner}\n\n"
    ));
    output.push_str(layout.limits_heading);
    output.push('\n');

    for category in plan.categories() {
        output.push_str(&format!(
            "  - {}: {}\n",
            layout.padded_name(&category.name),
            layout.currency_amount(category.limit)
        ));
    }
    output.push('\n');

    output
}

/// Per-category expenses followed by total, average and extremes
pub fn format_summary(layout: &Layout, sheet: &ExpenseSheet, summary: &ExpenseSummary) -> String {
    let heavy = rule('=', layout.summary_width);
    let mut output = String::new();

    output.push('\n');
    output.push_str(&heavy);
    output.push('\n');
    output.push_str(&" ".repeat(layout.summary_title_indent));
    output.push_str("EXPENSE SUMMARY\n");
    output.push_str(&heavy);
    output.push('\n');

    for (category, expense) in sheet.entries() {
        output.push_str(&format!(
            "* {:<width$}: {}\n",
            category.name,
            layout.report_amount(expense),
            width = SUMMARY_NAME_WIDTH
        ));
    }
    output.push_str(&rule('-', layout.summary_width));
    output.push('\n');

    let width = layout.label_width;
    output.push_str(&labelled_line(
        "TOTAL EXPENSES",
        width,
        &layout.report_amount(summary.total),
    ));
    output.push_str(&labelled_line(
        "AVERAGE EXPENSE",
        width,
        &layout.report_amount(summary.average),
    ));

    let categories = sheet.categories();
    let expenses = sheet.expenses();
    for (label, index) in [
        ("HIGHEST CATEGORY", summary.highest),
        ("LOWEST CATEGORY", summary.lowest),
    ] {
        let value = format!(
            "{} ({})",
            categories[index].name,
            layout.report_amount(expenses[index])
        );
        output.push_str(&labelled_line(label, width, &value));
    }

    output.push_str(&heavy);
    output.push('\n');

    output
}

/// One alert line per over-budget category and the closing count
pub fn format_alerts(layout: &Layout, report: &BudgetAlertReport) -> String {
    let mut output = String::from("\n=== BUDGET ALERTS ===\n");

    for alert in &report.alerts {
        output.push_str(&format!(
            "ALERT: {} exceeded the budget limit ({})!\n",
            alert.category,
            layout.report_amount(alert.limit)
        ));
    }

    if report.is_clean() {
        output.push_str(WITHIN_BUDGET_MESSAGE);
        output.push('\n');
    } else {
        output.push_str(&format!(
            "\n{}Summary: {} category(ies) exceeded budget.\n",
            layout.alert_count_indent,
            report.over_budget_count()
        ));
    }

    output.push_str(&rule('=', ALERT_RULE_WIDTH));
    output.push('\n');

    output
}
