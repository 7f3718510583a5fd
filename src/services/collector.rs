//! Expense collection
//!
//! Asks for one expense per category, re-prompting until each entry is a
//! non-negative amount.

use std::io::{BufRead, Write};

use tracing::info;

use super::validation::parse_expense;
use crate::display::Layout;
use crate::error::TrackerResult;
use crate::models::{BudgetPlan, ExpenseSheet};
use crate::setup::Prompter;

/// Message shown when an expense entry is rejected
pub const EXPENSE_REJECTION: &str = "Invalid input. Please enter a non-negative number.";

/// Collects the expense for every category of a plan
pub struct ExpenseCollector<'a> {
    layout: &'a Layout,
}

impl<'a> ExpenseCollector<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Prompt for each category in order and build the expense sheet
    pub fn collect<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        plan: BudgetPlan,
    ) -> TrackerResult<ExpenseSheet> {
        prompter.say("=== ENTER EXPENSES ===\n\n")?;
        prompter.say(&format!(
            "Enter your monthly expenses for {} categories.\n\n",
            plan.len()
        ))?;

        let rejection = self.layout.rejection(EXPENSE_REJECTION);
        let mut expenses = Vec::with_capacity(plan.len());

        for category in plan.categories() {
            let prompt = format!(
                "Enter expense for {}: {} ",
                self.layout.padded_name(&category.name),
                self.layout.currency
            );
            let expense = prompter.ask(&prompt, &rejection, parse_expense)?;
            info!(category = %category.name, expense = %expense, "recorded expense");
            expenses.push(expense);
        }

        prompter.say("\n")?;
        ExpenseSheet::new(plan, expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::setup::prompt::tests::{output, prompter};

    fn two_categories() -> BudgetPlan {
        BudgetPlan::new(vec![
            Category::new("Food", Money::from_units(100)),
            Category::new("Rent", Money::from_units(900)),
        ])
        .unwrap()
    }

    #[test]
    fn test_collects_in_order() {
        let layout = Layout::fixed("LKR");
        let mut p = prompter("40\n0\n");
        let sheet = ExpenseCollector::new(&layout)
            .collect(&mut p, two_categories())
            .unwrap();

        assert_eq!(sheet.expenses(), &[Money::from_units(40), Money::zero()]);
        assert_eq!(
            output(p),
            "=== ENTER EXPENSES ===\n\n\
             Enter your monthly expenses for 2 categories.\n\n\
             Enter expense for Food: LKR \
             Enter expense for Rent: LKR \n"
        );
    }

    #[test]
    fn test_rejects_negative_and_non_numeric() {
        let layout = Layout::fixed("LKR");
        let mut p = prompter("-5\nabc\n12.5\n7\n");
        let sheet = ExpenseCollector::new(&layout)
            .collect(&mut p, two_categories())
            .unwrap();

        assert_eq!(sheet.expenses()[0], Money::from_cents(1250));
        assert_eq!(sheet.expenses()[1], Money::from_units(7));

        let text = output(p);
        assert_eq!(text.matches(EXPENSE_REJECTION).count(), 2);
        assert_eq!(text.matches("Enter expense for Food: LKR ").count(), 3);
    }

    #[test]
    fn test_configurable_padding_and_spacing() {
        let layout = Layout::configurable("LKR");
        let mut p = prompter("x\n1\n2\n");
        ExpenseCollector::new(&layout)
            .collect(&mut p, two_categories())
            .unwrap();

        let text = output(p);
        assert!(text.contains(
            "Enter expense for Food      : LKR \
             Invalid input. Please enter a non-negative number.\n\n\
             Enter expense for Food      : LKR "
        ));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let layout = Layout::fixed("LKR");
        let mut p = prompter("5\n");
        let err = ExpenseCollector::new(&layout)
            .collect(&mut p, two_categories())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input closed while waiting for Enter expense for Rent: LKR"
        );
    }
}
