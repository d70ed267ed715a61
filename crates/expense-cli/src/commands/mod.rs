//! Command handlers.
//!
//! Each handler receives the store, the rendering options and the output
//! sink, so the whole dispatch can run against an in-memory store in tests.

mod add;
mod clear;
mod delete;
mod list;
mod search;

use std::io::Write;

use expense_core::ExpenseStore;

use crate::command::Command;
use crate::confirm::Confirm;
use crate::output::RenderOptions;

pub use add::handle_add;
pub use clear::handle_clear;
pub use delete::handle_delete;
pub use list::handle_list;
pub use search::handle_search;

/// Usage text printed for unknown or missing commands.
pub const HELP_TEXT: &str = "\
An expense recording system

Commands:

add AMOUNT MEMO - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field";

/// Print the usage text.
pub fn handle_help(out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{}", HELP_TEXT)?;
    Ok(())
}

/// Run a validated command against `store`.
pub fn execute(
    command: &Command,
    store: &mut dyn ExpenseStore,
    confirm: &mut dyn Confirm,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::List => handle_list(store, options, out),
        Command::Add {
            amount,
            memo,
            created_on,
        } => handle_add(store, amount, memo, *created_on, options, out),
        Command::Clear => handle_clear(store, confirm, options, out),
        Command::Delete { id } => handle_delete(store, *id, options, out),
        Command::Search { term } => handle_search(store, term, options, out),
        Command::Help => handle_help(out),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use expense_core::{SqliteStore, StoreConfig};

    use crate::output::RenderOptions;

    pub fn store() -> SqliteStore {
        SqliteStore::open_in_memory(StoreConfig::default()).unwrap()
    }

    pub fn text_options() -> RenderOptions {
        RenderOptions::default()
    }

    pub fn json_options() -> RenderOptions {
        RenderOptions {
            json: true,
            ..RenderOptions::default()
        }
    }

    pub fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }
}
