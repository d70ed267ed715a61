use std::io::Write;

use expense_core::ExpenseStore;

use crate::confirm::Confirm;
use crate::output::RenderOptions;

const CLEAR_PROMPT: &str = "This will delete all expenses. Are you sure?";

pub fn handle_clear(
    store: &mut dyn ExpenseStore,
    confirm: &mut dyn Confirm,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if !confirm.confirm(CLEAR_PROMPT)? {
        tracing::info!("clear declined");
        return Ok(());
    }

    let removed = store.delete_all()?;
    tracing::info!(removed, "cleared expenses");
    if options.json {
        let value = serde_json::json!({ "removed": removed });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else if !options.quiet {
        writeln!(out, "All expenses have been deleted.")?;
    }
    Ok(())
}
