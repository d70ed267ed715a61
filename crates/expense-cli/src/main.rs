//! Expenses CLI - a command-line expense ledger
//!
//! Records expenses (amount, memo, date) in a SQLite table and lists,
//! searches, deletes and clears them with running totals.

mod app;
mod cli;
mod command;
mod commands;
mod config;
mod confirm;
mod constants;
mod errors;
mod logging;
mod output;

use std::io::{self, Write};

use clap::Parser;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::command::Command;
use crate::confirm::{Confirm, FixedAnswer, TerminalConfirm};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let cli = ctx.cli();
    let command = Command::parse(&cli.args, cli.on.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !command.needs_store() {
        return commands::handle_help(&mut out);
    }

    logging::init(ctx)?;
    tracing::debug!(?command, "parsed command");

    let options = ctx.render_options()?;
    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    };

    let mut store = ctx.open_store()?;
    commands::execute(&command, &mut store, confirm.as_mut(), &options, &mut out)?;
    out.flush()?;
    drop(out);

    store.close()?;
    Ok(())
}
