//! Display formatting for terminal output
//!
//! Provides the layout parameters of each variant and the renderers for the
//! welcome banner, expense summary and budget alerts.

pub mod layout;
pub mod report;
pub mod summary;

pub use layout::Layout;
pub use summary::{format_alerts, format_summary, format_welcome, WITHIN_BUDGET_MESSAGE};
