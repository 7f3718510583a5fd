//! Budget plan and expense sheet
//!
//! A [`BudgetPlan`] is the ordered list of categories for one run. An
//! [`ExpenseSheet`] pairs that plan with one expense per category. Both are
//! validated on construction, so the rest of the pipeline can rely on a
//! non-empty, index-aligned list.

use super::category::Category;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Largest number of categories a plan may hold
pub const MAX_CATEGORIES: usize = 10;

/// Ordered, validated list of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetPlan {
    categories: Vec<Category>,
}

impl BudgetPlan {
    /// Build a plan, checking the count and every category
    pub fn new(categories: Vec<Category>) -> TrackerResult<Self> {
        if categories.is_empty() || categories.len() > MAX_CATEGORIES {
            return Err(TrackerError::Validation(format!(
                "category count must be between 1 and {} (got {})",
                MAX_CATEGORIES,
                categories.len()
            )));
        }

        for category in &categories {
            category
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;
        }

        Ok(Self { categories })
    }

    /// Categories in entry order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories (always at least one)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the plan has no categories (never true after `new`)
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A budget plan together with the expense recorded for each category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSheet {
    plan: BudgetPlan,
    expenses: Vec<Money>,
}

impl ExpenseSheet {
    /// Pair a plan with its expenses
    ///
    /// # Errors
    ///
    /// Fails when the expense count does not match the category count or an
    /// expense is negative or above [`Money::MAX`].
    pub fn new(plan: BudgetPlan, expenses: Vec<Money>) -> TrackerResult<Self> {
        if expenses.len() != plan.len() {
            return Err(TrackerError::Validation(format!(
                "expected {} expenses, got {}",
                plan.len(),
                expenses.len()
            )));
        }

        if let Some(negative) = expenses.iter().find(|e| e.is_negative()) {
            return Err(TrackerError::Validation(format!(
                "expense cannot be negative (got {})",
                negative
            )));
        }

        if let Some(huge) = expenses.iter().find(|e| !e.is_in_range()) {
            return Err(TrackerError::Validation(format!(
                "expense must not exceed {} (got {})",
                Money::MAX,
                huge
            )));
        }

        Ok(Self { plan, expenses })
    }

    pub fn categories(&self) -> &[Category] {
        self.plan.categories()
    }

    pub fn expenses(&self) -> &[Money] {
        &self.expenses
    }

    /// Iterate over (category, expense) pairs in entry order
    pub fn entries(&self) -> impl Iterator<Item = (&Category, Money)> + '_ {
        self.plan
            .categories()
            .iter()
            .zip(self.expenses.iter().copied())
    }
}
