//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use expense_core::ExpenseError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Wrong argument count or shape for a command
    Usage(String),

    /// A flag value could not be parsed
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(message) => {
                write!(f, "{}\nRun `expenses` without arguments to see usage.", message)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the process exit code for an error returned by a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<ExpenseError>() {
        Some(ExpenseError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        Some(ExpenseError::ConstraintViolation(_)) => exit_codes::CONSTRAINT_VIOLATION,
        Some(ExpenseError::Connection(_))
        | Some(ExpenseError::Schema(_))
        | Some(ExpenseError::Storage(_)) => exit_codes::DATABASE,
        None => 1,
    }
}
