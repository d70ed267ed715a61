use clap::Parser;

use expense_core::VERSION;

use crate::commands::HELP_TEXT;

/// Expenses - a command-line expense ledger
///
/// Global options go before the command word; everything from the command
/// word on is passed to the command verbatim.
#[derive(Parser, Debug)]
#[command(name = "expenses")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(after_help = HELP_TEXT)]
pub struct Cli {
    /// Path to the expense database
    #[arg(long, value_name = "PATH", env = "EXPENSES_DB")]
    pub db: Option<String>,

    /// Date for `add` (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,

    /// Output listings as JSON
    #[arg(long)]
    pub json: bool,

    /// Answer yes to the `clear` confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_command_tokens_are_verbatim() {
        let cli = Cli::try_parse_from(["expenses", "--json", "add", "-5", "refund"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.args, vec!["add", "-5", "refund"]);
    }

    #[test]
    fn test_no_command_is_empty() {
        let cli = Cli::try_parse_from(["expenses"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "expenses", "--db", "/tmp/x.db", "--on", "2024-01-02", "-q", "add", "1", "x",
        ])
        .unwrap();
        assert_eq!(cli.db.as_deref(), Some("/tmp/x.db"));
        assert_eq!(cli.on.as_deref(), Some("2024-01-02"));
        assert!(cli.quiet);
        assert_eq!(cli.args, vec!["add", "1", "x"]);
    }
}
