//! Category setup
//!
//! Produces the [`BudgetPlan`] for a run, either from the built-in preset or
//! by asking the user, plus the console prompter both paths share.

pub mod preset;
pub mod prompt;
pub mod wizard;

use std::io::{BufRead, Write};

use crate::error::TrackerResult;
use crate::models::BudgetPlan;

pub use preset::{FixedPreset, PRESET_CATEGORIES};
pub use prompt::Prompter;
pub use wizard::InteractiveSetup;

/// Something that can produce the ordered category list for a run
pub trait CategorySource {
    fn load<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> TrackerResult<BudgetPlan>;
}
