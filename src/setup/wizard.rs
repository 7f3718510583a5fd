//! Interactive category setup
//!
//! Asks how many categories to track, then a name and budget limit for each.

use std::io::{BufRead, Write};

use tracing::info;

use super::{CategorySource, Prompter};
use crate::display::layout::{Layout, BANNER_WIDTH};
use crate::display::report::rule;
use crate::error::TrackerResult;
use crate::models::{BudgetPlan, Category, MAX_CATEGORIES};
use crate::services::{parse_budget_limit, parse_category_count, parse_category_name};

/// Follow-up prompt after an empty category name
pub const EMPTY_NAME_REJECTION: &str =
    "Category name cannot be empty. Please enter a valid name: ";

/// Message shown when a budget limit is rejected
pub const LIMIT_REJECTION: &str = "Invalid input. Please enter a positive number.";

/// Category source that asks the user for every category
pub struct InteractiveSetup<'a> {
    layout: &'a Layout,
}

impl<'a> InteractiveSetup<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    fn ask_count<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> TrackerResult<usize> {
        let banner = rule('=', BANNER_WIDTH);
        prompter.say(&format!(
            "{banner}\n        EXPENSE TRACKER SETUP\n{banner}\n\n"
        ))?;

        let prompt = format!(
            "How many expense categories do you want to track? (1-{}): ",
            MAX_CATEGORIES
        );
        let rejection = self.layout.rejection(&format!(
            "Invalid input. Please enter a number between 1 and {}.",
            MAX_CATEGORIES
        ));

        prompter.ask(&prompt, &rejection, parse_category_count)
    }

    fn ask_category<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        position: usize,
    ) -> TrackerResult<Category> {
        let name = prompter.ask_insisting(
            &format!("Enter name for Category {}: ", self.layout.padded_name(&position.to_string())),
            EMPTY_NAME_REJECTION,
            parse_category_name,
        )?;

        let limit = prompter.ask(
            &format!(
                "Enter budget limit for {} : {} ",
                self.layout.padded_name(&name),
                self.layout.currency
            ),
            &self.layout.rejection(LIMIT_REJECTION),
            parse_budget_limit,
        )?;

        prompter.say("\n")?;
        Ok(Category::new(name, limit))
    }
}

impl CategorySource for InteractiveSetup<'_> {
    fn load<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> TrackerResult<BudgetPlan> {
        let count = self.ask_count(prompter)?;
        info!(count, "category count accepted");

        prompter.say("\n=== DEFINE YOUR CATEGORIES ===\n\n")?;

        let mut categories = Vec::with_capacity(count);
        for position in 1..=count {
            let category = self.ask_category(prompter, position)?;
            info!(name = %category.name, limit = %category.limit, "category defined");
            categories.push(category);
        }

        BudgetPlan::new(categories)
    }
}
