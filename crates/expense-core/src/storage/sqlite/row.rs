//! Expense row type for database queries.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rusqlite::Row;

use crate::error::{ExpenseError, Result};
use crate::storage::types::{Amount, Expense};

/// Column list matching `ExpenseRow::from_row`.
pub const EXPENSE_COLUMNS: &str = "id, amount, memo, created_on";

/// Raw row data from the expense table, before parsing into domain types.
#[derive(Debug)]
pub struct ExpenseRow {
    pub id: i64,
    pub amount: String,
    pub memo: String,
    pub created_on: String,
}

impl ExpenseRow {
    /// Read a row selected with `EXPENSE_COLUMNS`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            amount: row.get(1)?,
            memo: row.get(2)?,
            created_on: row.get(3)?,
        })
    }
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = ExpenseError;

    fn try_from(row: ExpenseRow) -> Result<Self> {
        let value = Decimal::from_str(&row.amount).map_err(|e| {
            ExpenseError::Storage(format!("Invalid amount '{}' in row {}: {}", row.amount, row.id, e))
        })?;
        let amount = Amount::from_decimal(value)
            .map_err(|e| ExpenseError::Storage(format!("Invalid amount in row {}: {}", row.id, e)))?;
        let created_on = NaiveDate::parse_from_str(&row.created_on, "%Y-%m-%d").map_err(|e| {
            ExpenseError::Storage(format!(
                "Invalid date '{}' in row {}: {}",
                row.created_on, row.id, e
            ))
        })?;

        Ok(Expense {
            id: row.id,
            amount,
            memo: row.memo,
            created_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: &str, created_on: &str) -> ExpenseRow {
        ExpenseRow {
            id: 7,
            amount: amount.to_string(),
            memo: "lunch".to_string(),
            created_on: created_on.to_string(),
        }
    }

    #[test]
    fn test_row_parses_into_expense() {
        let expense = Expense::try_from(raw("12.50", "2024-03-09")).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount.to_string(), "12.50");
        assert_eq!(expense.memo, "lunch");
        assert_eq!(expense.created_on, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_row_with_bad_date_is_storage_error() {
        let err = Expense::try_from(raw("1.00", "yesterday")).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_row_with_bad_amount_is_storage_error() {
        let err = Expense::try_from(raw("lots", "2024-03-09")).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }
}
