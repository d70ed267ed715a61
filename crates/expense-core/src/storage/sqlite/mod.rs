//! SQLite storage backend.
//!
//! One connection per process. Every user-supplied value is bound as a
//! statement parameter; the configured table name is the only interpolated
//! text and is validated by `StoreConfig`.

mod row;

use std::path::{Path, PathBuf};

use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Params};

use crate::error::{ExpenseError, Result};
use crate::storage::traits::ExpenseStore;
use crate::storage::types::{Expense, ExpenseListing, NewExpense, StoreConfig};

use row::{ExpenseRow, EXPENSE_COLUMNS};

/// SQLite-backed expense store.
pub struct SqliteStore {
    conn: Connection,
    config: StoreConfig,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and bootstrap the schema.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Connection` if the file cannot be opened and
    /// `ExpenseError::Schema` if the table cannot be created.
    pub fn open(path: &Path, config: StoreConfig) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            ExpenseError::Connection(format!("Cannot open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), table = config.table(), "opened database");
        Self::bootstrap(conn, config, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database, mainly for tests.
    pub fn open_in_memory(config: StoreConfig) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ExpenseError::Connection(format!("Cannot open in-memory database: {}", e)))?;
        Self::bootstrap(conn, config, None)
    }

    fn bootstrap(conn: Connection, config: StoreConfig, path: Option<PathBuf>) -> Result<Self> {
        register_functions(&conn)?;
        let store = Self { conn, config, path };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ExpenseError::Storage(format!("Close failed: {}", e)))
    }

    fn table(&self) -> &str {
        self.config.table()
    }

    fn table_exists(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![self.table()],
                |row| row.get(0),
            )
            .map_err(|e| ExpenseError::Schema(format!("Catalog lookup failed: {}", e)))?;
        Ok(count > 0)
    }

    fn query_listing<P: Params>(&self, sql: &str, params: P) -> Result<ExpenseListing> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, ExpenseRow::from_row)?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(Expense::try_from(row?)?);
        }
        Ok(ExpenseListing::from_expenses(expenses))
    }
}

impl ExpenseStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        if self.table_exists()? {
            return Ok(());
        }

        let table = self.table();
        self.conn
            .execute_batch(&format!(
                r#"
                CREATE TABLE "{table}" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    amount TEXT NOT NULL CHECK (CAST(amount AS REAL) > 0),
                    memo TEXT NOT NULL,
                    created_on TEXT NOT NULL DEFAULT (date('now', 'localtime'))
                );

                CREATE INDEX "{table}_created_on_idx" ON "{table}"(created_on, id);
                "#
            ))
            .map_err(|e| ExpenseError::Schema(format!("Cannot create table {}: {}", table, e)))?;
        tracing::info!(table, "created expense table");
        Ok(())
    }

    fn add_expense(&mut self, expense: &NewExpense) -> Result<Expense> {
        let table = self.table();
        let amount = expense.amount.to_string();
        let row = match expense.created_on {
            Some(date) => self.conn.query_row(
                &format!(
                    r#"INSERT INTO "{table}" (amount, memo, created_on) VALUES (?1, ?2, ?3)
                       RETURNING {EXPENSE_COLUMNS}"#
                ),
                params![amount, expense.memo, date.format("%Y-%m-%d").to_string()],
                ExpenseRow::from_row,
            )?,
            None => self.conn.query_row(
                &format!(
                    r#"INSERT INTO "{table}" (amount, memo) VALUES (?1, ?2)
                       RETURNING {EXPENSE_COLUMNS}"#
                ),
                params![amount, expense.memo],
                ExpenseRow::from_row,
            )?,
        };

        let stored = Expense::try_from(row)?;
        tracing::debug!(id = stored.id, amount = %stored.amount, "inserted expense");
        Ok(stored)
    }

    fn delete_all(&mut self) -> Result<usize> {
        let removed = self
            .conn
            .execute(&format!(r#"DELETE FROM "{}""#, self.table()), [])?;
        tracing::debug!(removed, "deleted all expenses");
        Ok(removed)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<Option<Expense>> {
        // Single statement: the lookup and the removal cannot interleave
        // with another process.
        let row = self
            .conn
            .query_row(
                &format!(
                    r#"DELETE FROM "{}" WHERE id = ?1 RETURNING {EXPENSE_COLUMNS}"#,
                    self.table()
                ),
                params![id],
                ExpenseRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let deleted = Expense::try_from(row)?;
                tracing::debug!(id, "deleted expense");
                Ok(Some(deleted))
            }
            None => {
                tracing::debug!(id, "no expense to delete");
                Ok(None)
            }
        }
    }

    fn list_all(&self) -> Result<ExpenseListing> {
        self.query_listing(
            &format!(
                r#"SELECT {EXPENSE_COLUMNS} FROM "{}" ORDER BY created_on ASC, id ASC"#,
                self.table()
            ),
            [],
        )
    }

    fn search(&self, term: &str) -> Result<ExpenseListing> {
        self.query_listing(
            &format!(
                r#"SELECT {EXPENSE_COLUMNS} FROM "{}"
                   WHERE fold(memo) LIKE ?1 ESCAPE '\'
                   ORDER BY created_on ASC, id ASC"#,
                self.table()
            ),
            params![like_pattern(&term.to_lowercase())],
        )
    }
}

/// Register `fold(text)`, a Unicode-aware lowercase used by `search`.
///
/// SQLite's own `LIKE` only folds ASCII letters.
fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(text.to_lowercase())
        },
    )
    .map_err(|e| ExpenseError::Connection(format!("Cannot register SQL functions: {}", e)))
}

/// Wrap `term` for a substring `LIKE` match, escaping its own wildcards.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::Amount;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory(StoreConfig::default()).unwrap()
    }

    fn new_expense(amount: &str, memo: &str) -> NewExpense {
        NewExpense::new(Amount::parse(amount).unwrap(), memo)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("coffee"), "%coffee%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let store = store();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();

        let tables: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'expenses'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut store = store();
        let before = chrono::Local::now().date_naive();
        let stored = store.add_expense(&new_expense("5", "coffee")).unwrap();
        let after = chrono::Local::now().date_naive();

        assert!(stored.id > 0);
        assert_eq!(stored.amount.to_string(), "5.00");
        assert_eq!(stored.memo, "coffee");
        assert!(stored.created_on >= before && stored.created_on <= after);
    }

    #[test]
    fn test_add_rejects_non_positive_amounts() {
        let mut store = store();
        for amount in ["0", "0.00", "-1", "0.004"] {
            let err = store.add_expense(&new_expense(amount, "nope")).unwrap_err();
            assert!(
                matches!(err, ExpenseError::ConstraintViolation(_)),
                "amount {} gave {:?}",
                amount,
                err
            );
        }
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_accepts_empty_memo() {
        let mut store = store();
        let stored = store.add_expense(&new_expense("1.00", "")).unwrap();
        assert_eq!(stored.memo, "");
    }

    #[test]
    fn test_list_orders_by_date_then_id() {
        let mut store = store();
        let late = new_expense("3.00", "late").with_created_on(date(2024, 5, 2));
        let early = new_expense("1.00", "early").with_created_on(date(2024, 5, 1));
        let late_too = new_expense("2.00", "late too").with_created_on(date(2024, 5, 2));
        store.add_expense(&late).unwrap();
        store.add_expense(&early).unwrap();
        store.add_expense(&late_too).unwrap();

        let listing = store.list_all().unwrap();
        let memos: Vec<&str> = listing.expenses.iter().map(|e| e.memo.as_str()).collect();
        assert_eq!(memos, vec!["early", "late", "late too"]);
        assert_eq!(listing.total.value(), dec!(6.00));
    }

    #[test]
    fn test_delete_by_id_returns_removed_row() {
        let mut store = store();
        let keep = store.add_expense(&new_expense("1.00", "keep")).unwrap();
        let gone = store.add_expense(&new_expense("2.00", "gone")).unwrap();

        let deleted = store.delete_by_id(gone.id).unwrap();
        assert_eq!(deleted, Some(gone.clone()));
        assert_eq!(store.delete_by_id(gone.id).unwrap(), None);

        let listing = store.list_all().unwrap();
        assert_eq!(listing.expenses, vec![keep]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = store();
        let first = store.add_expense(&new_expense("1.00", "a")).unwrap();
        store.delete_by_id(first.id).unwrap();
        let second = store.add_expense(&new_expense("1.00", "b")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_delete_all_reports_count() {
        let mut store = store();
        store.add_expense(&new_expense("1.00", "a")).unwrap();
        store.add_expense(&new_expense("2.00", "b")).unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert_eq!(store.delete_all().unwrap(), 0);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut store = store();
        store.add_expense(&new_expense("4.50", "Morning Coffee")).unwrap();
        store.add_expense(&new_expense("12.00", "books")).unwrap();
        store.add_expense(&new_expense("3.25", "coffee beans")).unwrap();

        let listing = store.search("COFFEE").unwrap();
        let memos: Vec<&str> = listing.expenses.iter().map(|e| e.memo.as_str()).collect();
        assert_eq!(memos, vec!["Morning Coffee", "coffee beans"]);
        assert_eq!(listing.total.to_string(), "7.75");
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let mut store = store();
        store.add_expense(&new_expense("3.80", "Café latte")).unwrap();
        store.add_expense(&new_expense("14.00", "Über ride")).unwrap();
        store.add_expense(&new_expense("2.00", "tea")).unwrap();

        let cafe = store.search("CAFÉ").unwrap();
        assert_eq!(cafe.len(), 1);
        assert_eq!(cafe.expenses[0].memo, "Café latte");

        let ride = store.search("über").unwrap();
        assert_eq!(ride.len(), 1);
        assert_eq!(ride.expenses[0].memo, "Über ride");
        assert_eq!(ride.total.to_string(), "14.00");
    }

    #[test]
    fn test_search_with_empty_term_returns_everything() {
        let mut store = store();
        store.add_expense(&new_expense("1.25", "a")).unwrap();
        store.add_expense(&new_expense("2.50", "")).unwrap();
        store.add_expense(&new_expense("3.00", "c")).unwrap();

        let listing = store.search("").unwrap();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing.total.value(), dec!(6.75));
        assert_eq!(listing.expenses, store.list_all().unwrap().expenses);
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let mut store = store();
        store.add_expense(&new_expense("1.00", "50% off")).unwrap();
        store.add_expense(&new_expense("1.00", "500 grams")).unwrap();

        let listing = store.search("50%").unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.expenses[0].memo, "50% off");
    }

    #[test]
    fn test_search_without_matches_totals_zero() {
        let mut store = store();
        store.add_expense(&new_expense("1.00", "a")).unwrap();
        let listing = store.search("zzz").unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.total.to_string(), "0.00");
    }

    #[test]
    fn test_custom_table_name() {
        let config = StoreConfig::with_table("ledger_2024").unwrap();
        let mut store = SqliteStore::open_in_memory(config).unwrap();
        store.add_expense(&new_expense("9.99", "x")).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
        assert_eq!(store.config().table(), "ledger_2024");
        assert!(store.path().is_none());
    }
}
