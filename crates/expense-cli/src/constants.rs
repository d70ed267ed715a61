//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success (including "not found" deletes and declined clears)
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Wrong argument count/shape, or an unparseable value.
    pub const INVALID_INPUT: i32 = 4;

    /// A table constraint rejected the write.
    pub const CONSTRAINT_VIOLATION: i32 = 5;

    /// The database could not be opened, bootstrapped, or queried.
    pub const DATABASE: i32 = 6;
}

/// Width of the rule printed above the total line.
pub const RULE_WIDTH: usize = 50;

/// Default separator between the columns of a row.
pub const DEFAULT_SEPARATOR: &str = " | ";
