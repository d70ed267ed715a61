use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use expense_core::storage::DEFAULT_TABLE;

use crate::constants::DEFAULT_SEPARATOR;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpensesConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_separator")]
    pub separator: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: None,
            table: default_table(),
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("expenses.db"))
}

/// Read the config file, or return defaults if it does not exist.
pub fn read_config(path: &Path) -> anyhow::Result<ExpensesConfig> {
    if !path.exists() {
        return Ok(ExpensesConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expenses"));
        }
    }
    Ok(home_dir()?.join(".config").join("expenses"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expenses"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("expenses"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
