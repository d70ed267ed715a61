use std::io::Write;

use expense_core::ExpenseStore;

use crate::output::{listing_json, listing_text, RenderOptions};

pub fn handle_search(
    store: &dyn ExpenseStore,
    term: &str,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let listing = store.search(term)?;
    tracing::info!(term, count = listing.len(), "searched expenses");

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listing_json(&listing))?)?;
    } else {
        write!(out, "{}", listing_text(&listing, &options.separator))?;
    }
    Ok(())
}
