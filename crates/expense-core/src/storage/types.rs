//! Core data types for the expense store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{ExpenseError, Result};

/// Number of fractional digits carried by every amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest integer part an amount may carry (a `numeric(11,2)` column).
const MAX_INTEGER_DIGITS: u32 = 9;

/// Default name of the expense table.
pub const DEFAULT_TABLE: &str = "expenses";

/// A fixed-point monetary amount with exactly two fractional digits.
///
/// Parsing normalizes the scale but does not check the sign: positivity
/// is a table constraint and is enforced by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a decimal string such as `"5"`, `"10.5"` or `"3.999"`.
    ///
    /// Values with more than two fractional digits are rounded half away
    /// from zero, the same way a `numeric(_, 2)` column stores them.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::InvalidInput` if the text is not a plain
    /// decimal number or its integer part has more than nine digits.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ExpenseError::InvalidInput("amount is empty".to_string()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
        {
            return Err(ExpenseError::InvalidInput(format!(
                "invalid amount '{}' (expected a decimal number like 12.50)",
                value
            )));
        }
        let parsed = Decimal::from_str(trimmed).map_err(|_| {
            ExpenseError::InvalidInput(format!(
                "invalid amount '{}' (expected a decimal number like 12.50)",
                value
            ))
        })?;
        Self::from_decimal(parsed)
    }

    /// Build an amount from an existing decimal, normalizing its scale.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let mut normalized =
            value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(AMOUNT_SCALE);
        let limit = Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS));
        if normalized.abs() >= limit {
            return Err(ExpenseError::InvalidInput(format!(
                "amount '{}' is out of range (at most {} integer digits)",
                value, MAX_INTEGER_DIGITS
            )));
        }
        Ok(Self(normalized))
    }

    /// The zero amount, used as the total of an empty listing.
    pub fn zero() -> Self {
        let mut zero = Decimal::ZERO;
        zero.rescale(AMOUNT_SCALE);
        Self(zero)
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// A stored expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Store-assigned identifier; never reused.
    pub id: i64,

    /// Positive amount with two fractional digits.
    pub amount: Amount,

    /// Free-text description.
    pub memo: String,

    /// Calendar date of the expense.
    pub created_on: NaiveDate,
}

/// Data for inserting a new expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Amount,
    pub memo: String,
    /// Explicit date; `None` lets the database default to today.
    pub created_on: Option<NaiveDate>,
}

impl NewExpense {
    /// Create a new expense dated by the database.
    pub fn new(amount: Amount, memo: impl Into<String>) -> Self {
        Self {
            amount,
            memo: memo.into(),
            created_on: None,
        }
    }

    /// Set an explicit date instead of the database default.
    pub fn with_created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = Some(date);
        self
    }
}

/// An ordered set of expenses together with the sum of their amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseListing {
    pub expenses: Vec<Expense>,
    pub total: Amount,
}

impl ExpenseListing {
    /// Wrap already-ordered expenses, summing their amounts exactly.
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let sum: Decimal = expenses.iter().map(|expense| expense.amount.value()).sum();
        let mut total = sum;
        total.rescale(AMOUNT_SCALE);
        Self {
            expenses,
            total: Amount(total),
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Store construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    table: String,
}

impl StoreConfig {
    /// Use a custom table name.
    ///
    /// The name is interpolated into SQL, so only plain identifiers are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::InvalidInput` if the name is not of the form
    /// `[A-Za-z_][A-Za-z0-9_]*` or is longer than 63 characters.
    pub fn with_table(table: &str) -> Result<Self> {
        validate_identifier(table)?;
        Ok(Self {
            table: table.to_string(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_start || !valid_rest || name.len() > 63 {
        return Err(ExpenseError::InvalidInput(format!(
            "invalid table name '{}' (letters, digits and underscores only)",
            name
        )));
    }
    if name.to_ascii_lowercase().starts_with("sqlite_") {
        return Err(ExpenseError::InvalidInput(format!(
            "table name '{}' is reserved",
            name
        )));
    }
    Ok(())
}
