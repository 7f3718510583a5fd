//! Text layout parameters
//!
//! The fixed and configurable variants share one pipeline but print with
//! slightly different spacing, widths and currency labelling. A [`Layout`]
//! captures those differences so every renderer and prompt can stay generic.

use crate::config::Variant;
use crate::models::Money;

/// Width of the banner rules
pub const BANNER_WIDTH: usize = 49;

/// Width of the rule closing the alert report
pub const ALERT_RULE_WIDTH: usize = 64;

/// Minimum width of the category column in the summary table
pub const SUMMARY_NAME_WIDTH: usize = 15;

/// Formatting parameters for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Currency label, e.g. "LKR"
    pub currency: String,
    /// Print an empty line before the welcome banner
    pub banner_leading_blank: bool,
    /// Heading above the list of budget limits
    pub limits_heading: &'static str,
    /// Minimum width of category names in prompts and the limit list
    pub name_width: usize,
    /// Text printed after a validation message (one or two newlines)
    pub rejection_suffix: &'static str,
    /// Width of the summary rules
    pub summary_width: usize,
    /// Indent of the summary title
    pub summary_title_indent: usize,
    /// Width of the statistic labels in the summary
    pub label_width: usize,
    /// Prefix summary and alert amounts with the currency label
    pub labelled_amounts: bool,
    /// Indent before the over-budget count line
    pub alert_count_indent: &'static str,
}

impl Layout {
    /// Layout of the five-category preset
    pub fn fixed(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            banner_leading_blank: false,
            limits_heading: "Budget Limits:",
            name_width: 0,
            rejection_suffix: "\n",
            summary_width: 38,
            summary_title_indent: 9,
            label_width: 23,
            labelled_amounts: false,
            alert_count_indent: " ",
        }
    }

    /// Layout of the interactive, user-defined variant
    pub fn configurable(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            banner_leading_blank: true,
            limits_heading: "Your Budget Limits:",
            name_width: 10,
            rejection_suffix: "\n\n",
            summary_width: 46,
            summary_title_indent: 15,
            label_width: 20,
            labelled_amounts: true,
            alert_count_indent: "",
        }
    }

    pub fn for_variant(variant: Variant, currency: impl Into<String>) -> Self {
        match variant {
            Variant::Fixed => Self::fixed(currency),
            Variant::Configurable => Self::configurable(currency),
        }
    }

    /// Amount that always carries the currency label (prompts, limit list)
    pub fn currency_amount(&self, amount: Money) -> String {
        amount.format_with_label(&self.currency)
    }

    /// Amount in the summary and alert sections
    pub fn report_amount(&self, amount: Money) -> String {
        if self.labelled_amounts {
            self.currency_amount(amount)
        } else {
            amount.to_string()
        }
    }

    /// Category name padded to the prompt width
    pub fn padded_name(&self, name: &str) -> String {
        format!("{:<width$}", name, width = self.name_width)
    }

    /// A validation message followed by the variant's spacing
    pub fn rejection(&self, message: &str) -> String {
        format!("{}{}", message, self.rejection_suffix)
    }
}
