use std::io::Write;

use chrono::NaiveDate;
use expense_core::{Amount, ExpenseStore, NewExpense};

use crate::output::{expense_json, RenderOptions};

pub fn handle_add(
    store: &mut dyn ExpenseStore,
    amount: &str,
    memo: &str,
    created_on: Option<NaiveDate>,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut new_expense = NewExpense::new(Amount::parse(amount)?, memo);
    if let Some(date) = created_on {
        new_expense = new_expense.with_created_on(date);
    }

    let stored = store.add_expense(&new_expense)?;
    tracing::info!(id = stored.id, "added expense");

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&expense_json(&stored))?)?;
    } else if !options.quiet {
        writeln!(out, "Added expense {}.", stored.id)?;
    }
    Ok(())
}
