//! Run settings for the expense tracker
//!
//! Settings are assembled from the command line for a single run; nothing is
//! read from or written to disk.

use clap::ValueEnum;

use crate::error::TrackerError;

/// Currency label printed before monetary amounts
pub const DEFAULT_CURRENCY: &str = "LKR";

/// How the category list is established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Five built-in categories with built-in limits
    Fixed,
    /// Categories and limits entered interactively (default)
    #[default]
    Configurable,
}

/// Machine-readable format appended after the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Settings for one tracker run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Which category source to use
    pub variant: Variant,

    /// Currency label (e.g. "LKR")
    pub currency: String,

    /// Optional machine-readable export
    pub export: Option<ExportFormat>,

    /// Diagnostic verbosity (0 = warnings only)
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            export: None,
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Reject settings that would produce a malformed report
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.currency.trim().is_empty() {
            return Err(TrackerError::Config(
                "currency label cannot be empty".to_string(),
            ));
        }

        if self.currency.chars().any(char::is_whitespace) {
            return Err(TrackerError::Config(format!(
                "currency label cannot contain whitespace: '{}'",
                self.currency
            )));
        }

        Ok(())
    }

    /// Log filter directive for the configured verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
