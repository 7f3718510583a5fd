//! Category model
//!
//! A category is a named expense bucket with its own budget limit.

use std::fmt;

use super::money::Money;

/// A named expense bucket with a budget limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name (trimmed, never empty once validated)
    pub name: String,

    /// Spending above this amount counts as over budget
    pub limit: Money,
}

impl Category {
    /// Create a new category, trimming the name
    pub fn new(name: impl Into<String>, limit: Money) -> Self {
        Self {
            name: name.into().trim().to_string(),
            limit,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if !self.limit.is_positive() {
            return Err(CategoryValidationError::NonPositiveLimit(self.limit));
        }

        if !self.limit.is_in_range() {
            return Err(CategoryValidationError::LimitTooLarge(self.limit));
        }

        Ok(())
    }

    /// Whether `spent` is strictly above this category's limit
    pub fn is_exceeded_by(&self, spent: Money) -> bool {
        spent > self.limit
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NonPositiveLimit(Money),
    LimitTooLarge(Money),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive (got {})", limit)
            }
            Self::LimitTooLarge(limit) => {
                write!(f, "Budget limit must not exceed {} (got {})", Money::MAX, limit)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
