//! Business logic layer
//!
//! Input validation rules and the expense collection step.

pub mod collector;
pub mod validation;

pub use collector::{ExpenseCollector, EXPENSE_REJECTION};
pub use validation::{
    parse_budget_limit, parse_category_count, parse_category_name, parse_expense,
};
