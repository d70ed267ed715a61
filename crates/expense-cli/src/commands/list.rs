use std::io::Write;

use expense_core::ExpenseStore;

use crate::output::{listing_json, listing_text, RenderOptions};

pub fn handle_list(
    store: &dyn ExpenseStore,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let listing = store.list_all()?;
    tracing::info!(count = listing.len(), "listed expenses");

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listing_json(&listing))?)?;
    } else {
        write!(out, "{}", listing_text(&listing, &options.separator))?;
    }
    Ok(())
}
