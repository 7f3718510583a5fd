//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report sections.

/// A horizontal rule made of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// `label` left-aligned in a field of `width`, followed by `: value`
pub fn labelled_line(label: &str, width: usize, value: &str) -> String {
    format!("{:<width$}: {}\n", label, value, width = width)
}
