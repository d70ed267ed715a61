//! Store trait definition.
//!
//! The `ExpenseStore` trait is the seam between the command layer and the
//! database. The CLI only ever talks to a store through it.

use super::types::{Expense, ExpenseListing, NewExpense};
use crate::error::Result;

/// Persistent expense store.
///
/// Implementations must ensure:
/// - every stored amount is strictly positive
/// - ids are never reused or changed
/// - listings are ordered by `created_on`, then `id`
pub trait ExpenseStore {
    /// Create the expense table if it does not exist yet.
    ///
    /// Safe to call on every startup; an existing table is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Schema` if the DDL fails.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a new expense.
    ///
    /// # Returns
    ///
    /// Returns the stored record, including its generated id and date.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ConstraintViolation` if the amount is not
    /// positive.
    fn add_expense(&mut self, expense: &NewExpense) -> Result<Expense>;

    /// Delete every expense.
    ///
    /// # Returns
    ///
    /// Returns the number of rows removed.
    fn delete_all(&mut self) -> Result<usize>;

    /// Delete a single expense by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(expense))` with the removed record, or `Ok(None)` if
    /// no expense has that id.
    fn delete_by_id(&mut self, id: i64) -> Result<Option<Expense>>;

    /// List all expenses with their total.
    fn list_all(&self) -> Result<ExpenseListing>;

    /// List expenses whose memo contains `term`, ignoring case.
    fn search(&self, term: &str) -> Result<ExpenseListing>;
}
