//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying expenses
//! as aligned text rows or JSON.

mod json;
mod text;

// Re-export public API
pub use json::{expense_json, listing_json};
pub use text::{expense_row, listing_text};

/// Rendering settings resolved from flags and config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text placed between the columns of a row.
    pub separator: String,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Suppress confirmation messages.
    pub quiet: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: crate::constants::DEFAULT_SEPARATOR.to_string(),
            json: false,
            quiet: false,
        }
    }
}
