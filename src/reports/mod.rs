//! Reports module for the expense tracker
//!
//! Provides the expense summary (total, average, extremes) and the budget
//! alert check.

pub mod budget_alerts;
pub mod summary;

pub use budget_alerts::{BudgetAlert, BudgetAlertReport};
pub use summary::{average, find_extremes, total, ExpenseSummary};
