//! Configuration module for the expense tracker
//!
//! Holds the per-run settings: category variant, currency label, export
//! format and log verbosity.

pub mod settings;

pub use settings::{ExportFormat, Settings, Variant, DEFAULT_CURRENCY};
