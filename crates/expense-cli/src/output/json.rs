//! JSON output formatting for expenses.

use expense_core::{Expense, ExpenseListing};

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "amount": expense.amount,
        "memo": expense.memo,
        "created_on": expense.created_on,
    })
}

/// Convert a listing to JSON, keeping the total as an exact decimal string.
pub fn listing_json(listing: &ExpenseListing) -> serde_json::Value {
    let expenses: Vec<serde_json::Value> = listing.expenses.iter().map(expense_json).collect();
    serde_json::json!({
        "count": listing.len(),
        "total": listing.total,
        "expenses": expenses,
    })
}
