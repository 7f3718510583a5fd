//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent one tracking run:
//! money amounts, categories with budget limits, and the expense sheet.

pub mod category;
pub mod money;
pub mod sheet;

pub use category::{Category, CategoryValidationError};
pub use money::{Money, MoneyParseError};
pub use sheet::{BudgetPlan, ExpenseSheet, MAX_CATEGORIES};
