//! Configuration management for the chronolog application.
//!
//! The configuration is deliberately small: the only setting is an optional
//! override for the directory holding the two data files. It is stored as
//! JSON in the platform application-data directory and edited either by hand
//! or through the interactive wizard behind the `init` subcommand.
//!
//! A missing configuration file is not an error; it simply yields the
//! defaults, so the application works on first run with zero setup.
//!
//! ## File locations
//!
//! The configuration file itself always lives in the default application-data
//! directory. Only the data files (user directory and event log) move when
//! `data_dir` is set, which keeps the configuration discoverable even after
//! the data has been pointed somewhere else.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application-data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Directory holding `user_database.json` and `scan_log.json`.
    ///
    /// `None` means the platform default. The `CHRONOLOG_DATA_DIR`
    /// environment variable takes precedence over both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from an explicit storage root.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Saves the configuration under an explicit storage root.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the storage root for the data files, honoring the configured
    /// override when present.
    pub fn storage(&self) -> DataStorage {
        match &self.data_dir {
            Some(dir) => DataStorage::at(dir.clone()),
            None => DataStorage::new(),
        }
    }

    /// Interactive configuration setup.
    ///
    /// Prompts for each setting with the current value as the default, so
    /// re-running the wizard only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        let current = config.data_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default();

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        let data_dir = data_dir.trim();
        Ok(Config {
            data_dir: if data_dir.is_empty() { None } else { Some(PathBuf::from(data_dir)) },
        })
    }
}
