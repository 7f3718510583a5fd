//! Input validation
//!
//! Each parser takes one raw line from the console and either returns the
//! validated value or a retryable [`TrackerError`]: `InvalidNumber` for
//! tokens that are not numbers, `Validation` for numbers out of range.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MoneyParseError, MAX_CATEGORIES};

/// Parse a category count in `1..=MAX_CATEGORIES`
pub fn parse_category_count(line: &str) -> TrackerResult<usize> {
    let token = line.trim();
    let count: i64 = token
        .parse()
        .map_err(|_| TrackerError::InvalidNumber(token.to_string()))?;

    if count < 1 || count > MAX_CATEGORIES as i64 {
        return Err(TrackerError::Validation(format!(
            "category count must be between 1 and {} (got {})",
            MAX_CATEGORIES, count
        )));
    }

    Ok(count as usize)
}

/// Parse a category name; surrounding whitespace is dropped
pub fn parse_category_name(line: &str) -> TrackerResult<String> {
    let name = line.trim();
    if name.is_empty() {
        return Err(TrackerError::Validation(
            "category name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Parse a budget limit, which must be strictly positive
///
/// A positive entry that rounds to zero cents gets its own message.
pub fn parse_budget_limit(line: &str) -> TrackerResult<Money> {
    let token = line.trim();
    let limit = parse_amount(token)?;
    if !has_nonzero_digit(token) || token.starts_with('-') {
        return Err(TrackerError::Validation(format!(
            "budget limit must be positive (got '{}')",
            token
        )));
    }

    if !limit.is_positive() {
        return Err(TrackerError::Validation(format!(
            "budget limit '{}' rounds to {}; enter at least 0.01",
            token, limit
        )));
    }
    Ok(limit)
}

/// Parse an expense, which must not be negative
///
/// The sign is checked on the entry itself, so `-0.004` is rejected even
/// though it rounds to zero cents.
pub fn parse_expense(line: &str) -> TrackerResult<Money> {
    let token = line.trim();
    let expense = parse_amount(token)?;
    if token.starts_with('-') && has_nonzero_digit(token) {
        return Err(TrackerError::Validation(format!(
            "expense cannot be negative (got '{}')",
            token
        )));
    }
    Ok(expense)
}

fn parse_amount(token: &str) -> TrackerResult<Money> {
    Money::parse(token).map_err(|e| match e {
        MoneyParseError::InvalidFormat(_) => TrackerError::InvalidNumber(e.to_string()),
        MoneyParseError::OutOfRange(_) => TrackerError::Validation(format!(
            "amount must not exceed {} (got '{}')",
            Money::MAX,
            token
        )),
    })
}

fn has_nonzero_digit(token: &str) -> bool {
    token.chars().any(|c| matches!(c, '1'..='9'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count_bounds() {
        assert_eq!(parse_category_count("1").unwrap(), 1);
        assert_eq!(parse_category_count(" 10 ").unwrap(), 10);

        for rejected in ["0", "11", "-3"] {
            let err = parse_category_count(rejected).unwrap_err();
            assert!(err.is_validation(), "{}", rejected);
        }
    }

    #[test]
    fn test_category_count_non_numeric() {
        for rejected in ["abc", "", "2.5", "3 cats"] {
            let err = parse_category_count(rejected).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidNumber(_)), "{}", rejected);
        }
    }

    #[test]
    fn test_category_name() {
        assert_eq!(parse_category_name("  Rent  ").unwrap(), "Rent");
        assert_eq!(parse_category_name("Dining Out").unwrap(), "Dining Out");
        assert!(parse_category_name("").is_err());
        assert!(parse_category_name("   \t").is_err());
    }

    #[test]
    fn test_budget_limit() {
        assert_eq!(parse_budget_limit("2500").unwrap(), Money::from_units(2500));
        assert_eq!(parse_budget_limit("0.01").unwrap(), Money::from_cents(1));
        assert!(parse_budget_limit("0").unwrap_err().is_validation());
        assert!(parse_budget_limit("-10").unwrap_err().is_validation());
        assert!(parse_budget_limit("-0.004").unwrap_err().is_validation());
        assert!(matches!(
            parse_budget_limit("lots"),
            Err(TrackerError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_expense() {
        assert_eq!(parse_expense("0").unwrap(), Money::zero());
        assert_eq!(parse_expense("12000").unwrap(), Money::from_units(12000));
        assert_eq!(parse_expense("99.99").unwrap(), Money::from_cents(9999));
        assert!(parse_expense("-1").unwrap_err().is_validation());
        assert!(parse_expense("ten").unwrap_err().is_retryable());
    }

    #[test]
    fn test_fraction_without_whole_part() {
        assert_eq!(parse_expense(".5").unwrap(), Money::from_cents(50));
        assert_eq!(parse_budget_limit(".75").unwrap(), Money::from_cents(75));
    }

    #[test]
    fn test_negative_expense_rejected_before_rounding() {
        let err = parse_expense("-0.004").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("negative"));

        assert_eq!(parse_expense("-0").unwrap(), Money::zero());
        assert_eq!(parse_expense("0.004").unwrap(), Money::zero());
    }

    #[test]
    fn test_limit_rounding_to_zero_is_explained() {
        let err = parse_budget_limit("0.004").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("enter at least 0.01"), "{}", err);
        assert_eq!(parse_budget_limit("0.005").unwrap(), Money::from_cents(1));
    }

    #[test]
    fn test_oversized_amounts_are_retryable() {
        for input in ["90000000000000000", "1000000000000.01"] {
            let err = parse_expense(input).unwrap_err();
            assert!(err.is_validation(), "{}", input);
            let err = parse_budget_limit(input).unwrap_err();
            assert!(err.is_validation(), "{}", input);
        }
        assert_eq!(parse_expense("1000000000000").unwrap(), Money::MAX);
    }
}
