//! Built-in category preset
//!
//! Five categories with fixed monthly limits, used by the `--fixed` variant.

use std::io::{BufRead, Write};

use super::{CategorySource, Prompter};
use crate::error::TrackerResult;
use crate::models::{BudgetPlan, Category, Money};

/// Preset categories and their limits, in display order
pub const PRESET_CATEGORIES: [(&str, Money); 5] = [
    ("Food", Money::from_units(10_000)),
    ("Travel", Money::from_units(5_000)),
    ("Utilities", Money::from_units(8_000)),
    ("Entertainment", Money::from_units(3_000)),
    ("Other", Money::from_units(2_000)),
];

/// Category source returning the built-in preset without prompting
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPreset;

impl FixedPreset {
    pub fn plan() -> TrackerResult<BudgetPlan> {
        BudgetPlan::new(
            PRESET_CATEGORIES
                .iter()
                .map(|(name, limit)| Category::new(*name, *limit))
                .collect(),
        )
    }
}

impl CategorySource for FixedPreset {
    fn load<R: BufRead, W: Write>(&self, _prompter: &mut Prompter<R, W>) -> TrackerResult<BudgetPlan> {
        Self::plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::prompt::tests::{output, prompter};

    #[test]
    fn test_preset_plan() {
        let plan = FixedPreset::plan().unwrap();
        let names: Vec<_> = plan.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Food", "Travel", "Utilities", "Entertainment", "Other"]);
        assert_eq!(plan.categories()[3].limit, Money::from_units(3000));
    }

    #[test]
    fn test_load_does_not_prompt() {
        let mut p = prompter("");
        let plan = FixedPreset.load(&mut p).unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(output(p), "");
    }
}
