//! Budget Alerts
//!
//! Flags every category whose expense is strictly above its budget limit.

use crate::models::{ExpenseSheet, Money};

/// One over-budget category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    /// Position of the category in the plan
    pub index: usize,
    /// Category name
    pub category: String,
    /// The category's budget limit
    pub limit: Money,
    /// Amount actually spent
    pub spent: Money,
}

/// Result of checking a sheet against its limits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetAlertReport {
    /// Alerts in category order
    pub alerts: Vec<BudgetAlert>,
}

impl BudgetAlertReport {
    /// Check every category of a sheet
    pub fn check(sheet: &ExpenseSheet) -> Self {
        let alerts = sheet
            .entries()
            .enumerate()
            .filter(|(_, (category, spent))| category.is_exceeded_by(*spent))
            .map(|(index, (category, spent))| BudgetAlert {
                index,
                category: category.name.clone(),
                limit: category.limit,
                spent,
            })
            .collect();

        Self { alerts }
    }

    pub fn over_budget_count(&self) -> usize {
        self.alerts.len()
    }

    /// True when no category is over budget
    pub fn is_clean(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Whether the category at `index` is over budget
    pub fn is_flagged(&self, index: usize) -> bool {
        self.alerts.iter().any(|a| a.index == index)
    }
}
