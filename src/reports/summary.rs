//! Expense Summary
//!
//! Total, average and the highest/lowest categories of an expense sheet.

use crate::models::{ExpenseSheet, Money};

/// Sum of all expenses
pub fn total(expenses: &[Money]) -> Money {
    expenses.iter().sum()
}

/// Average expense per category, rounded to the cent
///
/// Returns `None` for an empty list.
pub fn average(expenses: &[Money]) -> Option<Money> {
    total(expenses).split_evenly(expenses.len())
}

/// Indices of the highest and lowest expense, in that order
///
/// Ties keep the earliest index for both. Returns `None` for an empty list.
pub fn find_extremes(expenses: &[Money]) -> Option<(usize, usize)> {
    let first = expenses.first()?;
    let (mut highest, mut lowest) = (0, 0);
    let (mut max, mut min) = (*first, *first);

    for (index, &expense) in expenses.iter().enumerate().skip(1) {
        if expense > max {
            max = expense;
            highest = index;
        }
        if expense < min {
            min = expense;
            lowest = index;
        }
    }

    Some((highest, lowest))
}

/// Derived statistics for one expense sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Sum of all expenses
    pub total: Money,
    /// Total divided by the number of categories
    pub average: Money,
    /// Index of the first category with the highest expense
    pub highest: usize,
    /// Index of the first category with the lowest expense
    pub lowest: usize,
}

impl ExpenseSummary {
    /// Compute the summary for a sheet
    pub fn generate(sheet: &ExpenseSheet) -> Self {
        let expenses = sheet.expenses();
        // A sheet always has at least one category.
        let (highest, lowest) = find_extremes(expenses).unwrap_or((0, 0));

        Self {
            total: total(expenses),
            average: average(expenses).unwrap_or_default(),
            highest,
            lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPlan, Category};

    fn money(units: &[i64]) -> Vec<Money> {
        units.iter().map(|u| Money::from_units(*u)).collect()
    }

    #[test]
    fn test_total_and_average() {
        let expenses = money(&[12000, 3000, 6000, 2500, 1000]);
        assert_eq!(total(&expenses), Money::from_units(24500));
        assert_eq!(average(&expenses), Some(Money::from_units(4900)));
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn test_average_rounds_to_cent() {
        let expenses = vec![Money::from_cents(100), Money::zero(), Money::zero()];
        assert_eq!(average(&expenses), Some(Money::from_cents(33)));
    }

    #[test]
    fn test_extremes_first_occurrence_wins() {
        assert_eq!(find_extremes(&money(&[5, 5, 3])), Some((0, 2)));
        assert_eq!(find_extremes(&money(&[1, 9, 9, 1])), Some((1, 0)));
        assert_eq!(find_extremes(&money(&[4, 4, 4])), Some((0, 0)));
        assert_eq!(find_extremes(&money(&[2, 8, 0, 8, 0])), Some((1, 2)));
        assert_eq!(find_extremes(&[]), None);
    }

    #[test]
    fn test_single_category_summary() {
        let plan = BudgetPlan::new(vec![Category::new("Rent", Money::from_units(10))]).unwrap();
        let sheet = ExpenseSheet::new(plan, money(&[42])).unwrap();
        let summary = ExpenseSummary::generate(&sheet);

        assert_eq!(summary.total, Money::from_units(42));
        assert_eq!(summary.average, summary.total);
        assert_eq!((summary.highest, summary.lowest), (0, 0));
    }
}
