//! Path resolution for config and database files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_database_path, ExpensesConfig};

/// Resolve the config file path, checking EXPENSES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("EXPENSES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path from CLI args (or EXPENSES_DB), config, or default.
pub fn resolve_database_path(cli: &Cli, config: &ExpensesConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.database.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_database_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["expenses", "--db", "/tmp/flag.db", "list"]).unwrap();
        let mut config = ExpensesConfig::default();
        config.database.path = Some("/tmp/config.db".to_string());

        let path = resolve_database_path(&cli, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let mut cli = Cli::try_parse_from(["expenses", "list"]).unwrap();
        cli.db = None;
        let mut config = ExpensesConfig::default();
        config.database.path = Some("/tmp/config.db".to_string());

        let path = resolve_database_path(&cli, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config.db"));
    }
}
