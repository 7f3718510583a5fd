//! Expense Tracker - monthly expense tracking with budget alerts
//!
//! This library provides the core functionality for a console expense
//! tracker. It records one expense per category, computes the total, average,
//! highest and lowest category, and flags categories that went over their
//! budget limit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run settings (variant, currency, export format, verbosity)
//! - `error`: Custom error types
//! - `models`: Money, categories and the expense sheet
//! - `setup`: Category sources (built-in preset or interactive) and prompting
//! - `services`: Input validation and expense collection
//! - `reports`: Summary statistics and budget alerts
//! - `display`: Text rendering of banner, summary and alerts
//! - `export`: JSON, YAML and CSV output of the results
//! - `tracker`: The end-to-end session pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::{config::Settings, setup::Prompter, tracker};
//!
//! let stdin = std::io::stdin();
//! let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
//! let run = tracker::run(&Settings::default(), &mut prompter)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod setup;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
