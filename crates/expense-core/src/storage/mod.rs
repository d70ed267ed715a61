//! Storage abstractions and the SQLite backend.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::ExpenseStore;
pub use types::{Amount, Expense, ExpenseListing, NewExpense, StoreConfig, DEFAULT_TABLE};
