//! # Expense Core
//!
//! Core library for Expenses - a single-operator, command-line expense ledger.
//!
//! This crate owns the expense table: schema bootstrap, every SQL statement,
//! and the typed records and totals handed back to the CLI.
//!
//! ## Architecture
//!
//! - **storage**: the `ExpenseStore` trait, data types, and the SQLite backend
//! - **error**: the error hierarchy shared by all store operations

pub mod error;
pub mod storage;

pub use error::{ExpenseError, Result};
pub use storage::{
    Amount, Expense, ExpenseListing, ExpenseStore, NewExpense, SqliteStore, StoreConfig,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
