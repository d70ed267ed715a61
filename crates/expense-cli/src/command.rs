//! Command recognition and argument-shape validation.
//!
//! Raw command tokens are turned into a `Command` in one step; anything the
//! store would need to reject later (amount format, positivity) is left to
//! the store.

use chrono::NaiveDate;

use crate::errors::CliError;

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add {
        amount: String,
        memo: String,
        created_on: Option<NaiveDate>,
    },
    Clear,
    Delete {
        id: i64,
    },
    Search {
        term: String,
    },
    Help,
}

impl Command {
    /// Parse the command word and its arguments.
    ///
    /// `on` is the value of the global `--on` flag, which only `add` accepts.
    /// Unknown or missing command words yield `Command::Help`.
    pub fn parse(args: &[String], on: Option<&str>) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        let command = match name.as_str() {
            "list" => {
                expect_no_args("list", rest)?;
                Command::List
            }
            "add" => match rest {
                [amount, memo] => Command::Add {
                    amount: amount.clone(),
                    memo: memo.clone(),
                    created_on: on.map(parse_date).transpose()?,
                },
                _ => return Err(CliError::usage("You must provide an amount and memo.")),
            },
            "clear" => {
                expect_no_args("clear", rest)?;
                Command::Clear
            }
            "delete" => match rest {
                [id] => Command::Delete { id: parse_id(id)? },
                _ => return Err(CliError::usage("You must provide the id of one expense.")),
            },
            "search" => match rest {
                [term] => Command::Search { term: term.clone() },
                _ => return Err(CliError::usage("You must provide a search term.")),
            },
            _ => Command::Help,
        };

        if on.is_some() && !matches!(command, Command::Add { .. }) {
            return Err(CliError::usage("--on can only be used with `add`."));
        }
        Ok(command)
    }

    /// Whether this command needs the database.
    pub fn needs_store(&self) -> bool {
        !matches!(self, Command::Help)
    }
}

fn expect_no_args(name: &str, rest: &[String]) -> Result<(), CliError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CliError::usage(format!("`{}` takes no arguments.", name)))
    }
}

fn parse_id(value: &str) -> Result<i64, CliError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(CliError::usage(format!(
            "'{}' is not a valid id (expected an unsigned integer).",
            value
        )));
    }
    value
        .parse::<i64>()
        .map_err(|_| CliError::usage(format!("The id '{}' is out of range.", value)))
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date '{}' (expected YYYY-MM-DD).", value))
    })
}
