//! Configuration for certrack.
//!
//! Settings live in `config.json` inside the per-user data directory. A
//! missing file means defaults, so the tool runs without any setup.
//!
//! The database location is resolved in this order:
//!
//! 1. the `CERTRACK_DB` environment variable (a `.env` file is honoured)
//! 2. `database_path` from the config file
//! 3. `certrack.db` in the data directory
//!
//! ```rust,no_run
//! use certrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.database_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "CERTRACK_DB";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Database file; the data directory default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    /// `tracing` filter directive such as `info` or `certrack=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database file, honouring `CERTRACK_DB`.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        self.database_path_with(&DataStorage::new())
    }

    /// Resolves the database file against `storage`, ignoring the environment.
    pub fn database_path_with(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(storage.get_path(DB_FILE_NAME)?),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Interactive setup, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let default_db = DataStorage::new().get_path(DB_FILE_NAME)?;

        msg_print!(Message::ConfigHeader, true);

        let database_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                config
                    .database_path
                    .clone()
                    .unwrap_or(default_db.clone())
                    .display()
                    .to_string(),
            )
            .interact_text()?;
        let database_path = PathBuf::from(database_path.trim());
        config.database_path = if database_path == default_db { None } else { Some(database_path) };

        let log_level: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogLevel.to_string())
            .default(config.log_level().to_string())
            .interact_text()?;
        let log_level = log_level.trim().to_string();
        config.log_level = if log_level == DEFAULT_LOG_LEVEL || log_level.is_empty() { None } else { Some(log_level) };

        Ok(config)
    }
}
