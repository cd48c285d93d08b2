//! Monthly summary report formatting

use std::fmt::Write;

use crate::models::{Money, MonthlySummary};

const SEPARATOR_WIDTH: usize = 32;

/// Status label for a remaining budget amount
pub fn budget_status(remaining: Money) -> &'static str {
    if remaining.is_negative() {
        "over"
    } else {
        "within"
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render a monthly summary as plain text
///
/// A blank line follows the totals and the spending section. Category
/// sections are only included when they have rows.
pub fn format_summary(month: &str, summary: &MonthlySummary) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Summary for {}", month);
    let _ = writeln!(out, "{}", separator(SEPARATOR_WIDTH));
    let _ = writeln!(out, "Total income:  {}", summary.income_total);
    let _ = writeln!(out, "Total expense: {}", summary.expense_total);
    let _ = writeln!(out, "Net:           {}", summary.net);
    let _ = writeln!(out);

    if !summary.category_spend.is_empty() {
        let _ = writeln!(out, "Category spending:");
        for (category, total) in &summary.category_spend {
            let _ = writeln!(out, "  - {}: {}", category, total);
        }
        let _ = writeln!(out);
    }

    if !summary.remaining_by_category.is_empty() {
        let _ = writeln!(out, "Remaining by category:");
        for (category, remaining) in &summary.remaining_by_category {
            let _ = writeln!(
                out,
                "  - {}: {} ({})",
                category,
                remaining,
                budget_status(*remaining)
            );
        }
    }

    out
}
