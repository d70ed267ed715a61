//! Application-level utilities for the Expenses CLI.
//!
//! This module provides:
//! - Path resolution for config and database files
//! - The lazily-configured application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
