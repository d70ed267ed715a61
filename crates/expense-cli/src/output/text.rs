//! Text output formatting for expenses.

use expense_core::{Expense, ExpenseListing};

use crate::constants::RULE_WIDTH;

/// Render one expense: id, date and amount right-justified, then the memo.
pub fn expense_row(expense: &Expense, separator: &str) -> String {
    [
        format!("{:>3}", expense.id),
        format!("{:>10}", expense.created_on.to_string()),
        format!("{:>12}", expense.amount),
        expense.memo.clone(),
    ]
    .join(separator)
}

/// Header line announcing how many rows follow.
pub fn count_header(count: usize) -> String {
    match count {
        1 => "There is 1 expense.".to_string(),
        n => format!("There are {} expenses.", n),
    }
}

/// Footer line with the total right-aligned to the rule.
pub fn total_line(listing: &ExpenseListing) -> String {
    let label = "Total";
    format!(
        "{}{:>width$}",
        label,
        listing.total,
        width = RULE_WIDTH - label.len()
    )
}

/// Render a full listing: header, rows, rule and total.
pub fn listing_text(listing: &ExpenseListing, separator: &str) -> String {
    let mut lines = Vec::with_capacity(listing.len() + 3);
    lines.push(count_header(listing.len()));
    for expense in &listing.expenses {
        lines.push(expense_row(expense, separator));
    }
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(total_line(listing));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
