//! Application context for the Expenses CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use expense_core::{ExpenseError, SqliteStore, StoreConfig};

use crate::cli::Cli;
use crate::config::{read_config, ExpensesConfig};
use crate::output::RenderOptions;

use super::resolver::{resolve_config_path, resolve_database_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ExpensesConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<&ExpensesConfig> {
        self.config
            .get_or_try_init(|| read_config(&resolve_config_path()?))
    }

    /// Rendering settings for this invocation.
    pub fn render_options(&self) -> anyhow::Result<RenderOptions> {
        Ok(RenderOptions {
            separator: self.config()?.display.separator.clone(),
            json: self.cli.json,
            quiet: self.cli.quiet,
        })
    }

    /// Resolve the database file for this invocation.
    pub fn database_path(&self) -> anyhow::Result<PathBuf> {
        resolve_database_path(self.cli, self.config()?)
    }

    /// Open the store, creating the database directory if needed.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.database_path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Connection(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let store_config = StoreConfig::with_table(&self.config()?.database.table)?;
        tracing::info!(path = %path.display(), "opening expense database");
        Ok(SqliteStore::open(&path, store_config)?)
    }
}
