//! Shell configuration from environment variables

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use todo_core::Locale;

const DEFAULT_DATA_DIR: &str = ".todo-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the task blob
    pub data_dir: PathBuf,
    pub locale: Locale,
    /// Ask before deleting tasks
    pub confirm: bool,
    /// Print the view as JSON instead of text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            locale: Locale::default(),
            confirm: true,
            json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup, so tests need not touch the process env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let data_dir = lookup("TODO_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let locale = match lookup("TODO_LOCALE") {
            Some(raw) => raw.parse::<Locale>().map_err(|e| anyhow!("TODO_LOCALE: {e}"))?,
            None => defaults.locale,
        };

        Ok(Self {
            data_dir,
            locale,
            confirm: env_flag(lookup("TODO_CONFIRM"), defaults.confirm),
            json: env_flag(lookup("TODO_JSON"), defaults.json),
        })
    }
}

fn env_flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
