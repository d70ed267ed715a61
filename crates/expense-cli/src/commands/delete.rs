use std::io::Write;

use expense_core::ExpenseStore;

use crate::output::{expense_json, expense_row, RenderOptions};

pub fn handle_delete(
    store: &mut dyn ExpenseStore,
    id: i64,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let deleted = store.delete_by_id(id)?;
    tracing::info!(id, found = deleted.is_some(), "delete requested");

    if options.json {
        let value = deleted
            .as_ref()
            .map(expense_json)
            .unwrap_or(serde_json::Value::Null);
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    match deleted {
        Some(expense) => {
            writeln!(out, "The following expense has been deleted:")?;
            writeln!(out, "{}", expense_row(&expense, &options.separator))?;
        }
        None => {
            writeln!(out, "There is no expense with the id '{}'.", id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use expense_core::{Amount, NewExpense};

    #[test]
    fn test_delete_missing_on_empty_table() {
        let mut store = store();
        let mut out = Vec::new();
        handle_delete(&mut store, 999, &text_options(), &mut out).unwrap();
        assert_eq!(output(out), "There is no expense with the id '999'.\n");
    }

    #[test]
    fn test_delete_shows_removed_row() {
        let mut store = store();
        let keep = store
            .add_expense(&NewExpense::new(Amount::parse("1").unwrap(), "keep"))
            .unwrap();
        let gone = store
            .add_expense(&NewExpense::new(Amount::parse("2").unwrap(), "gone"))
            .unwrap();

        let mut out = Vec::new();
        handle_delete(&mut store, gone.id, &text_options(), &mut out).unwrap();
        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "The following expense has been deleted:");
        assert_eq!(lines[1], expense_row(&gone, " | "));

        assert_eq!(store.list_all().unwrap().expenses, vec![keep]);
    }

    #[test]
    fn test_delete_json_missing_is_null() {
        let mut store = store();
        let mut out = Vec::new();
        handle_delete(&mut store, 5, &json_options(), &mut out).unwrap();
        assert_eq!(output(out).trim(), "null");
    }
}
